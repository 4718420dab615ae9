//! Tone presentation catalog
//!
//! Pure lookup from a tone identifier to display metadata. The tone set is
//! open: the backend may introduce new tones at any time, and unknown values
//! fall back to a neutral default instead of failing.

/// Display metadata for one tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonePresentation {
    pub label: &'static str,
    pub icon: &'static str,
    /// Accent color name used by the terminal front-end
    pub accent: &'static str,
}

/// Presentation for tones the catalog does not know
pub const DEFAULT: TonePresentation = TonePresentation {
    label: "Reply",
    icon: "✉",
    accent: "white",
};

/// Look up display metadata for a tone identifier
pub fn lookup(tone: &str) -> TonePresentation {
    match tone {
        "professional" => TonePresentation {
            label: "Professional",
            icon: "💼",
            accent: "blue",
        },
        "friendly" => TonePresentation {
            label: "Friendly",
            icon: "😊",
            accent: "green",
        },
        "brief" => TonePresentation {
            label: "Brief",
            icon: "⚡",
            accent: "yellow",
        },
        "detailed" => TonePresentation {
            label: "Detailed",
            icon: "📝",
            accent: "magenta",
        },
        _ => DEFAULT,
    }
}
