//! Static content tables for the SingEasy pages.
//!
//! All records are read-only, defined at compile time, and never mutated.
//! Page views render these directly; nothing here participates in the
//! recording lifecycle.

/// An expandable text/video lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
    /// YouTube video id for the embedded clip.
    pub video_id: &'static str,
}

/// A vocal exercise shown on the practice page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
}

/// A sample tune for the singing test, with its reference clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestTune {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub clip_url: &'static str,
    pub tips: &'static [&'static str],
}

/// A common beginner mistake and its fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mistake {
    pub mistake: &'static str,
    pub solution: &'static str,
}

/// One step of the daily warm-up routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutineStep {
    pub time: &'static str,
    pub activity: &'static str,
}

/// A motivational quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const LESSONS: [Lesson; 4] = [
    Lesson {
        id: 1,
        title: "Understanding Pitch",
        description: "Learn what pitch is and how to control your voice",
        body: "Pitch is how high or low a sound is. When you sing, you're changing \
the pitch of your voice to create melody.\n\n\
- Pitch is measured in frequencies (Hz)\n\
- Higher notes = higher frequency, lower notes = lower frequency\n\
- Your vocal cords vibrate to create different pitches\n\
- Practice matching pitches you hear\n\n\
Exercise: Try humming a simple tune like \"Happy Birthday\" and focus on \
going up and down smoothly.",
        video_id: "8x3c3LhnXa8",
    },
    Lesson {
        id: 2,
        title: "Rhythm and Beat",
        description: "Master timing and staying in rhythm while singing",
        body: "Rhythm is the pattern of sounds and silences in music. Good rhythm \
makes your singing sound professional.\n\n\
- Beat is the steady pulse you feel in music\n\
- Rhythm is the pattern of long and short sounds\n\
- Clap or tap along to music to internalize the beat\n\
- Count out loud: 1-2-3-4 to stay on time\n\n\
Exercise: Listen to a simple song and clap along to the beat. Then try \
singing while maintaining that steady pulse.",
        video_id: "gXh5bWCo6e0",
    },
    Lesson {
        id: 3,
        title: "Breathing Techniques",
        description: "Proper breathing is the foundation of great singing",
        body: "Breath control is essential for sustaining notes and singing with \
power and emotion.\n\n\
- Breathe from your diaphragm (belly), not chest\n\
- Inhale deeply through your nose\n\
- Release air steadily and controlled\n\
- Practice \"belly breathing\" daily\n\n\
Exercise: Lie on your back with a book on your stomach. Breathe so the book \
rises and falls. This is diaphragmatic breathing.",
        video_id: "R-K_ksKvK6U",
    },
    Lesson {
        id: 4,
        title: "Vocal Warm-ups",
        description: "Prepare your voice before singing",
        body: "Warming up prevents strain and helps you sing better. Never skip \
your warm-up!\n\n\
- Always warm up for 5-10 minutes before singing\n\
- Start with gentle humming\n\
- Do lip trills and tongue trills\n\
- Gradually increase your range\n\n\
Exercise: Try lip trills (like a motor sound), humming scales (do-re-mi), \
and \"Mee-May-Mah-Moh-Moo\" on different pitches.",
        video_id: "9QozH3u_5RQ",
    },
];

pub const EXERCISES: [Exercise; 3] = [
    Exercise {
        id: 1,
        title: "AA-EE-OO Practice",
        description: "Practice vowel sounds to improve clarity",
        instructions: "Sing 'AA-EE-OO' slowly, holding each vowel for 3 seconds. \
Focus on clear, open sounds.",
    },
    Exercise {
        id: 2,
        title: "Breath Control Humming",
        description: "Build breath support and control",
        instructions: "Take a deep breath and hum steadily for as long as you can. \
Try to keep the pitch consistent.",
    },
    Exercise {
        id: 3,
        title: "Sa Re Ga Ma Scale",
        description: "Practice basic Indian classical scale",
        instructions: "Sing 'Sa Re Ga Ma Pa Dha Ni Sa' going up, then back down. \
Start slowly and build speed.",
    },
];

pub const TEST_TUNES: [TestTune; 2] = [
    TestTune {
        id: 1,
        name: "Simple Scale",
        description: "Try to match this basic do-re-mi scale",
        clip_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
        tips: &[
            "Listen carefully before attempting",
            "Focus on smooth transitions",
            "Keep steady pitch",
        ],
    },
    TestTune {
        id: 2,
        name: "Melody Pattern",
        description: "Repeat this short melody pattern",
        clip_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
        tips: &[
            "Break it into smaller parts",
            "Match the rhythm too",
            "Stay relaxed",
        ],
    },
];

pub const TIPS: [&str; 10] = [
    "Stay hydrated - drink plenty of water throughout the day",
    "Practice daily, even if just for 10-15 minutes",
    "Warm up your voice before singing",
    "Record yourself to track improvement",
    "Don't compare yourself to others - focus on your own progress",
    "Rest your voice when it feels tired",
    "Sing songs you love to stay motivated",
    "Stand up straight for better breathing",
    "Relax your jaw and shoulders while singing",
    "Be patient - improvement takes time",
];

pub const MISTAKES: [Mistake; 5] = [
    Mistake {
        mistake: "Singing from the throat",
        solution: "Use your diaphragm for proper breath support. Place your hand on \
your belly and feel it expand as you breathe.",
    },
    Mistake {
        mistake: "Straining to hit high notes",
        solution: "Build your range gradually. Don't force high notes - it can \
damage your voice. Practice scales slowly.",
    },
    Mistake {
        mistake: "Not warming up",
        solution: "Always warm up for 5-10 minutes before singing. Start with \
gentle humming and lip trills.",
    },
    Mistake {
        mistake: "Poor posture",
        solution: "Stand or sit up straight with shoulders relaxed. Good posture \
opens up your airways for better sound.",
    },
    Mistake {
        mistake: "Practicing when sick",
        solution: "Rest your voice when you have a cold or sore throat. Singing \
while sick can cause long-term damage.",
    },
];

pub const ROUTINE: [RoutineStep; 5] = [
    RoutineStep { time: "0-2 min", activity: "Deep breathing exercises" },
    RoutineStep { time: "2-4 min", activity: "Gentle humming" },
    RoutineStep { time: "4-6 min", activity: "Lip trills and tongue trills" },
    RoutineStep { time: "6-8 min", activity: "Simple scales (do-re-mi)" },
    RoutineStep { time: "8-10 min", activity: "Practice a favorite simple song" },
];

pub const QUOTES: [Quote; 4] = [
    Quote {
        quote: "The voice is a muscle, and it needs to be exercised.",
        author: "Renée Fleming",
    },
    Quote {
        quote: "Singing is a way of escaping. It's another world.",
        author: "Edith Piaf",
    },
    Quote {
        quote: "To sing is to pray twice.",
        author: "St. Augustine",
    },
    Quote {
        quote: "The only thing better than singing is more singing.",
        author: "Ella Fitzgerald",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_and_exercise_ids_are_sequential() {
        for (i, lesson) in LESSONS.iter().enumerate() {
            assert_eq!(lesson.id, i as u32 + 1);
        }
        for (i, exercise) in EXERCISES.iter().enumerate() {
            assert_eq!(exercise.id, i as u32 + 1);
        }
    }

    #[test]
    fn every_lesson_has_a_video() {
        for lesson in &LESSONS {
            assert_eq!(lesson.video_id.len(), 11, "{} has a bad video id", lesson.title);
        }
    }

    #[test]
    fn test_tunes_reference_playable_clips() {
        for tune in &TEST_TUNES {
            assert!(tune.clip_url.starts_with("https://"));
            assert!(!tune.tips.is_empty());
        }
    }
}
