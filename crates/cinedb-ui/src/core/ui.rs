//! Closed styling vocabularies for the presentational primitives.
//!
//! # Design
//! - One enum per component axis (variant, size, level, position).
//! - Every enum maps exhaustively to its class list via a `const fn`, so a
//!   new variant cannot ship without a style.

/// Colour treatment for buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Main call to action.
    #[default]
    Primary,
    /// Neutral or cancel action.
    Secondary,
    /// Destructive action.
    Danger,
    /// Confirming action.
    Success,
}

impl ButtonVariant {
    /// DaisyUI tone class for the variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-neutral",
            Self::Danger => "btn-error",
            Self::Success => "btn-success",
        }
    }
}

/// Button size presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// Compact button used inside cards.
    Small,
    /// Default size.
    #[default]
    Medium,
    /// Prominent call to action.
    Large,
}

impl ButtonSize {
    /// DaisyUI size class for the preset.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Small => "btn-sm",
            Self::Medium => "btn-md",
            Self::Large => "btn-lg",
        }
    }
}

/// Class applied to disabled buttons on top of the `disabled` attribute.
pub const BUTTON_DISABLED_CLASS: &str = "btn-disabled";

/// Heading level rendered by the title primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TitleLevel {
    /// `<h1>`.
    #[default]
    H1,
    /// `<h2>`.
    H2,
    /// `<h3>`.
    H3,
    /// `<h4>`.
    H4,
    /// `<h5>`.
    H5,
    /// `<h6>`.
    H6,
}

impl TitleLevel {
    /// HTML tag name for the level.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// Responsive size and weight classes for the level.
    #[must_use]
    pub const fn size_class(self) -> &'static str {
        match self {
            Self::H1 => "text-4xl md:text-5xl font-bold",
            Self::H2 => "text-3xl md:text-4xl font-bold",
            Self::H3 => "text-2xl md:text-3xl font-semibold",
            Self::H4 => "text-xl md:text-2xl font-semibold",
            Self::H5 => "text-lg md:text-xl font-medium",
            Self::H6 => "text-base md:text-lg font-medium",
        }
    }
}

/// Colour treatment for titles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TitleVariant {
    /// Default body heading colour.
    #[default]
    Primary,
    /// Muted heading.
    Secondary,
    /// Brand gradient text.
    Gradient,
    /// White text for dark hero backgrounds.
    White,
}

impl TitleVariant {
    /// Colour classes for the variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Primary => "text-base-content",
            Self::Secondary => "text-base-content/70",
            Self::Gradient => {
                "bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent"
            }
            Self::White => "text-white",
        }
    }
}

/// Severity of an inline message or toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MessageKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
    /// Something needs attention.
    Warning,
    /// Neutral information.
    #[default]
    Info,
}

/// Style descriptor resolved from a [`MessageKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageStyle {
    /// Container alert class.
    pub alert_class: &'static str,
    /// Leading icon glyph.
    pub icon: &'static str,
    /// ARIA role for assistive tech.
    pub role: &'static str,
}

impl MessageKind {
    /// Resolve the container class, icon and role for the kind.
    #[must_use]
    pub const fn style(self) -> MessageStyle {
        match self {
            Self::Success => MessageStyle {
                alert_class: "alert-success",
                icon: "✅",
                role: "status",
            },
            Self::Error => MessageStyle {
                alert_class: "alert-error",
                icon: "❌",
                role: "alert",
            },
            Self::Warning => MessageStyle {
                alert_class: "alert-warning",
                icon: "⚠️",
                role: "alert",
            },
            Self::Info => MessageStyle {
                alert_class: "alert-info",
                icon: "ℹ️",
                role: "status",
            },
        }
    }
}

/// Screen corner or edge where toasts are anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastPosition {
    /// Top right corner.
    #[default]
    TopRight,
    /// Top left corner.
    TopLeft,
    /// Bottom right corner.
    BottomRight,
    /// Bottom left corner.
    BottomLeft,
    /// Centered along the top edge.
    TopCenter,
    /// Centered along the bottom edge.
    BottomCenter,
}

impl ToastPosition {
    /// DaisyUI toast placement classes.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::TopRight => "toast-top toast-end",
            Self::TopLeft => "toast-top toast-start",
            Self::BottomRight => "toast-bottom toast-end",
            Self::BottomLeft => "toast-bottom toast-start",
            Self::TopCenter => "toast-top toast-center",
            Self::BottomCenter => "toast-bottom toast-center",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ButtonSize, ButtonVariant, MessageKind, TitleLevel, TitleVariant, ToastPosition};

    #[test]
    fn defaults_match_component_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Medium);
        assert_eq!(TitleLevel::default(), TitleLevel::H1);
        assert_eq!(TitleVariant::default(), TitleVariant::Primary);
        assert_eq!(MessageKind::default(), MessageKind::Info);
        assert_eq!(ToastPosition::default(), ToastPosition::TopRight);
    }

    #[test]
    fn title_levels_map_to_matching_tags() {
        let levels = [
            TitleLevel::H1,
            TitleLevel::H2,
            TitleLevel::H3,
            TitleLevel::H4,
            TitleLevel::H5,
            TitleLevel::H6,
        ];
        for (index, level) in levels.into_iter().enumerate() {
            assert_eq!(level.tag(), format!("h{}", index + 1));
        }
    }

    #[test]
    fn error_messages_use_alert_role() {
        assert_eq!(MessageKind::Error.style().role, "alert");
        assert_eq!(MessageKind::Success.style().alert_class, "alert-success");
        assert_ne!(MessageKind::Warning.style().icon, MessageKind::Info.style().icon);
    }

    #[test]
    fn variant_classes_are_distinct() {
        let classes = [
            ButtonVariant::Primary.as_class(),
            ButtonVariant::Secondary.as_class(),
            ButtonVariant::Danger.as_class(),
            ButtonVariant::Success.as_class(),
        ];
        for (i, left) in classes.iter().enumerate() {
            for right in &classes[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }
}
