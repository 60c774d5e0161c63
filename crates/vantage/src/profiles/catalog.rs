use super::{Profile, ProfileId};

/// The demo candidate deck presented in the discover tab.
pub fn demo_candidates() -> Vec<Profile> {
    vec![
        Profile {
            id: ProfileId("1".to_string()),
            name: "Isabella".to_string(),
            age: 24,
            job: "Classical Violinist".to_string(),
            bio: "Music is the silence between the notes. Looking for someone to share the quiet moments with.".to_string(),
            image_url: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
            interests: vec!["Violin".to_string(), "Opera".to_string(), "Literature".to_string()],
        },
        Profile {
            id: ProfileId("2".to_string()),
            name: "Julian".to_string(),
            age: 28,
            job: "Architect".to_string(),
            bio: "Designing skylines by day, sketching portraits by night. I value structure and chaos equally.".to_string(),
            image_url: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
            interests: vec!["Architecture".to_string(), "Sketching".to_string(), "Jazz".to_string()],
        },
        Profile {
            id: ProfileId("3".to_string()),
            name: "Sophia".to_string(),
            age: 25,
            job: "Art Curator".to_string(),
            bio: "Life imitates art. Lets paint a masterpiece together.".to_string(),
            image_url: "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
            interests: vec!["Modern Art".to_string(), "Wine".to_string(), "Travel".to_string()],
        },
    ]
}
