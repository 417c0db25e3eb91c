//! Shared design-token palette
//!
//! Chart code never hard-codes colors; it asks for a token and the token
//! resolves to its hex value here.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// High-intensity warning
    Red500,
    /// Caution
    Amber500,
    /// Neutral / informational
    Blue500,
    Surface,
    TextPrimary,
    TextMuted,
    Border,
}

impl ColorToken {
    /// Design-token name, as used by the dashboard stylesheet
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Red500 => "red-500",
            ColorToken::Amber500 => "amber-500",
            ColorToken::Blue500 => "blue-500",
            ColorToken::Surface => "surface",
            ColorToken::TextPrimary => "text-primary",
            ColorToken::TextMuted => "text-muted",
            ColorToken::Border => "border",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            ColorToken::Red500 => "#ef4444",
            ColorToken::Amber500 => "#f59e0b",
            ColorToken::Blue500 => "#3b82f6",
            ColorToken::Surface => "#ffffff",
            ColorToken::TextPrimary => "#111827",
            ColorToken::TextMuted => "#6b7280",
            ColorToken::Border => "#e5e7eb",
        }
    }

    /// Opaque RGBA value of the token
    pub fn rgba(self) -> (u8, u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4), 255)
    }
}
