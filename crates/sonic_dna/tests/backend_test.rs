//! Tests for the mock track backend.

use sonic_dna::{
    MockTrackBackend, PromptComposer, PromptInput, SequenceRandom, TrackBackend, TrackErrorKind,
    TrackRequest, TrackStatus,
};

fn request() -> TrackRequest {
    TrackRequest::new("Pop track. clean vocals.", vec!["Pop".to_string()], "artist-1").unwrap()
}

#[test]
fn test_submit_completes_immediately() {
    let backend = MockTrackBackend::new("https://cdn.example.com/");
    let track = backend.submit(&request()).unwrap();

    assert_eq!(*track.status(), TrackStatus::Completed);
    assert_eq!(backend.base_url(), "https://cdn.example.com");
    assert_eq!(
        track.audio_url(),
        &format!("https://cdn.example.com/{}.mp3", track.id())
    );
    assert_eq!(
        track.image_url(),
        &format!("https://cdn.example.com/{}.jpg", track.id())
    );
}

#[test]
fn test_track_id_is_uuid() {
    let track = MockTrackBackend::default().submit(&request()).unwrap();

    let groups: Vec<&str> = track.id().split('-').collect();
    assert_eq!(groups.len(), 5);
    assert_eq!(track.id().len(), 36);
    assert_eq!(track.title(), &format!("Track {}", groups[0]));
}

#[test]
fn test_track_ids_are_unique() {
    let backend = MockTrackBackend::default();
    let first = backend.submit(&request()).unwrap();
    let second = backend.submit(&request()).unwrap();

    assert_ne!(first.id(), second.id());
}

#[test]
fn test_request_rejects_long_prompt() {
    let err = TrackRequest::new("x".repeat(499), Vec::new(), "artist-1").unwrap_err();
    assert_eq!(
        err.kind(),
        &TrackErrorKind::PromptTooLong {
            length: 499,
            max: 498
        }
    );
}

#[test]
fn test_generated_prompt_is_submittable() {
    let input = PromptInput::new("hyperpopStar");
    let prompt = PromptComposer::default()
        .generate(&input, &mut SequenceRandom::new([3, 8]))
        .unwrap();

    let request = TrackRequest::new(
        prompt.prompt().clone(),
        prompt.breakdown().tags().clone(),
        "artist-1",
    )
    .unwrap();
    let track = MockTrackBackend::default().submit(&request).unwrap();

    assert_eq!(*track.status(), TrackStatus::Completed);
    assert_eq!(request.tags(), prompt.breakdown().tags());
}

#[test]
fn test_track_serializes_camel_case() {
    let track = MockTrackBackend::default().submit(&request()).unwrap();
    let json = serde_json::to_value(&track).unwrap();

    assert_eq!(json["status"], "completed");
    assert!(json["audioUrl"].as_str().unwrap().ends_with(".mp3"));
    assert!(json["imageUrl"].as_str().unwrap().ends_with(".jpg"));
}
