//! Built-in track list used when the backend is unreachable.
//!
//! The offline app must never show an empty ballot, so the gateway falls
//! back to this fixed list of 15 tracks (12 standard, 3 bonus). Counts
//! start at zero and comments empty; everything reconciles against the
//! backend once it comes back.

use encore_core::track::Track;
use encore_core::types::DbId;

struct SeedTrack {
    id: DbId,
    title: &'static str,
    duration: &'static str,
    is_bonus: bool,
    emotional_tag: &'static str,
    cover_image: &'static str,
}

const SEED: [SeedTrack; 15] = [
    SeedTrack { id: 1, title: "Undertow", duration: "3:42", is_bonus: false, emotional_tag: "driving", cover_image: "/covers/undertow.jpg" },
    SeedTrack { id: 2, title: "Paper Lanterns", duration: "4:05", is_bonus: false, emotional_tag: "wistful", cover_image: "/covers/paper-lanterns.jpg" },
    SeedTrack { id: 3, title: "Static Bloom", duration: "3:18", is_bonus: false, emotional_tag: "restless", cover_image: "/covers/static-bloom.jpg" },
    SeedTrack { id: 4, title: "Glasshouse", duration: "4:51", is_bonus: false, emotional_tag: "fragile", cover_image: "/covers/glasshouse.jpg" },
    SeedTrack { id: 5, title: "Northern Mile", duration: "3:57", is_bonus: false, emotional_tag: "hopeful", cover_image: "/covers/northern-mile.jpg" },
    SeedTrack { id: 6, title: "Copper Sky", duration: "3:29", is_bonus: false, emotional_tag: "warm", cover_image: "/covers/copper-sky.jpg" },
    SeedTrack { id: 7, title: "Low Tide Letters", duration: "5:02", is_bonus: false, emotional_tag: "aching", cover_image: "/covers/low-tide-letters.jpg" },
    SeedTrack { id: 8, title: "Vesper", duration: "2:54", is_bonus: false, emotional_tag: "quiet", cover_image: "/covers/vesper.jpg" },
    SeedTrack { id: 9, title: "Arcade Heart", duration: "3:33", is_bonus: false, emotional_tag: "playful", cover_image: "/covers/arcade-heart.jpg" },
    SeedTrack { id: 10, title: "Salt & Circuitry", duration: "4:12", is_bonus: false, emotional_tag: "bittersweet", cover_image: "/covers/salt-and-circuitry.jpg" },
    SeedTrack { id: 11, title: "Moth Season", duration: "3:46", is_bonus: false, emotional_tag: "haunted", cover_image: "/covers/moth-season.jpg" },
    SeedTrack { id: 12, title: "Last Exit Reverie", duration: "4:38", is_bonus: false, emotional_tag: "defiant", cover_image: "/covers/last-exit-reverie.jpg" },
    SeedTrack { id: 13, title: "Undertow (Strings Reprise)", duration: "3:11", is_bonus: true, emotional_tag: "tender", cover_image: "/covers/undertow-reprise.jpg" },
    SeedTrack { id: 14, title: "Glasshouse (Demo)", duration: "4:20", is_bonus: true, emotional_tag: "raw", cover_image: "/covers/glasshouse-demo.jpg" },
    SeedTrack { id: 15, title: "Copper Sky (Live)", duration: "4:44", is_bonus: true, emotional_tag: "electric", cover_image: "/covers/copper-sky-live.jpg" },
];

/// Fresh copies of the seed tracks.
pub fn seed_tracks() -> Vec<Track> {
    SEED.iter()
        .map(|s| Track {
            id: s.id,
            title: s.title.to_string(),
            duration: s.duration.to_string(),
            is_bonus: s.is_bonus,
            edition: if s.is_bonus { "Bonus" } else { "Standard" }.to_string(),
            emotional_tag: s.emotional_tag.to_string(),
            votes: 0,
            favorites: 0,
            comments: Vec::new(),
            cover_image: s.cover_image.to_string(),
            audio_url: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encore_core::track::TrackFilter;

    #[test]
    fn seed_has_twelve_standard_and_three_bonus() {
        let tracks = seed_tracks();
        assert_eq!(tracks.len(), 15);
        assert_eq!(
            tracks.iter().filter(|t| TrackFilter::Standard.matches(t)).count(),
            12
        );
        assert_eq!(
            tracks.iter().filter(|t| TrackFilter::Bonus.matches(t)).count(),
            3
        );
    }

    #[test]
    fn seed_ids_are_unique_and_counts_start_empty() {
        let tracks = seed_tracks();
        let mut ids: Vec<_> = tracks.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 15);
        assert!(tracks.iter().all(|t| t.votes == 0 && t.comments.is_empty()));
    }
}
