//! Terminal practice recorder — the page views without the pages.
//!
//! Flow mirrors the singing test: play (or hum) a reference tune, record a
//! take between keypresses, save it as a WAV with a metadata sidecar, and
//! get one of the canned feedback messages.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use singeasy_core::content::TEST_TUNES;
use singeasy_core::feedback::pick_feedback;
use singeasy_core::storage::export::save_wav;
use singeasy_core::{
    CaptureSource, RecordingArtifact, RecordingSession, SessionDelegate, SessionError,
    SessionPhase,
};
use singeasy_cpal::CpalMicSource;

/// Delegate that plays the role of the toast surface.
struct ConsoleDelegate;

impl SessionDelegate for ConsoleDelegate {
    fn on_state_changed(&self, phase: SessionPhase) {
        match phase {
            SessionPhase::Recording => println!("Recording started! 🎤"),
            SessionPhase::Stopped => println!("Recording stopped!"),
            SessionPhase::Idle => {}
        }
    }

    fn on_error(&self, error: &SessionError) {
        eprintln!("Could not access microphone: {error}");
    }

    fn on_recording_finished(&self, artifact: &RecordingArtifact) {
        println!(
            "Captured {:.1}s ({} bytes).",
            artifact.duration_secs(),
            artifact.len()
        );
    }
}

fn wait_for_enter(prompt: &str) {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
}

fn run() -> Result<(), SessionError> {
    let tune = &TEST_TUNES[0];
    println!("Mini Singing Test 🎤");
    println!("Tune: {} — {}", tune.name, tune.description);
    println!("Reference clip: {}", tune.clip_url);
    for tip in tune.tips {
        println!("  • {tip}");
    }
    println!();

    let source = CpalMicSource::default_device()?;
    let format = source.format();
    let mut session = RecordingSession::new(source);
    session.set_delegate(Arc::new(ConsoleDelegate));

    wait_for_enter("Press Enter to start recording... ");
    session.start()?;

    wait_for_enter("Recording — press Enter to stop... ");
    if session.stop().is_none() {
        return Err(SessionError::InvalidState("no take was recorded"));
    }

    let artifact = session
        .artifact()
        .ok_or(SessionError::InvalidState("no artifact after stop"))?;
    let path = save_wav(artifact, format, &PathBuf::from("recordings"))?;
    println!("Recording downloaded to {}", path.display());

    let mut rng = rand::thread_rng();
    println!();
    println!("Your Feedback: {}", pick_feedback(&mut rng));
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("practice session failed: {err}");
        std::process::exit(1);
    }
}
