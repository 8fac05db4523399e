//! Side effects the page asks its host to perform.

use std::fmt;

use serde::Serialize;

/// Page elements an effect can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The document root, carrier of `data-theme`.
    Root,
    ThemeToggle,
    MenuToggle,
    MobileNav,
    SubscribeInput,
    GameFrame,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Root => "root",
            Target::ThemeToggle => "theme_toggle",
            Target::MenuToggle => "menu_toggle",
            Target::MobileNav => "mobile_nav",
            Target::SubscribeInput => "subscribe_input",
            Target::GameFrame => "game_frame",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side effect. Hosts apply them in the order they are returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    SetAttribute {
        target: Target,
        name: &'static str,
        value: String,
    },
    SetClass {
        target: Target,
        class: &'static str,
        enabled: bool,
    },
    ShowToast {
        message: String,
    },
    HideToast,
    ClearInput {
        target: Target,
    },
    /// Replace the frame's loading overlay with an error and a retry action.
    ShowFrameError {
        message: String,
    },
    HideFrameOverlay,
    ShowFrameOverlay,
    /// Suppress the browser's default handling of the triggering event.
    PreventDefault,
    ScrollTo {
        top: i32,
        smooth: bool,
    },
    Persist {
        key: &'static str,
        value: String,
    },
    Reload,
}

impl Effect {
    pub(crate) fn attribute(target: Target, name: &'static str, value: impl Into<String>) -> Self {
        Effect::SetAttribute {
            target,
            name,
            value: value.into(),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::SetAttribute {
                target,
                name,
                value,
            } => write!(f, "{}[{}] = \"{}\"", target, name, value),
            Effect::SetClass {
                target,
                class,
                enabled,
            } => {
                let sign = if *enabled { '+' } else { '-' };
                write!(f, "{}.class {}{}", target, sign, class)
            }
            Effect::ShowToast { message } => write!(f, "toast \"{}\"", message),
            Effect::HideToast => write!(f, "toast hidden"),
            Effect::ClearInput { target } => write!(f, "{} cleared", target),
            Effect::ShowFrameError { message } => write!(f, "frame error \"{}\" [Retry]", message),
            Effect::HideFrameOverlay => write!(f, "frame overlay hidden"),
            Effect::ShowFrameOverlay => write!(f, "frame overlay shown"),
            Effect::PreventDefault => write!(f, "default prevented"),
            Effect::ScrollTo { top, smooth } => {
                let how = if *smooth { "smooth" } else { "instant" };
                write!(f, "scroll to {} ({})", top, how)
            }
            Effect::Persist { key, value } => write!(f, "store {} = \"{}\"", key, value),
            Effect::Reload => write!(f, "reload"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_attribute() {
        let effect = Effect::attribute(Target::Root, "data-theme", "dark");
        assert_eq!(effect.to_string(), "root[data-theme] = \"dark\"");
    }

    #[test]
    fn test_display_class() {
        let effect = Effect::SetClass {
            target: Target::MobileNav,
            class: "active",
            enabled: false,
        };
        assert_eq!(effect.to_string(), "mobile_nav.class -active");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(Effect::ScrollTo {
            top: 420,
            smooth: true,
        })
        .unwrap();
        assert_eq!(json["effect"], "scroll_to");
        assert_eq!(json["top"], 420);

        let json = serde_json::to_value(Effect::Reload).unwrap();
        assert_eq!(json["effect"], "reload");
    }

    #[test]
    fn test_target_serializes_snake_case() {
        let json = serde_json::to_value(Effect::ClearInput {
            target: Target::SubscribeInput,
        })
        .unwrap();
        assert_eq!(json["target"], "subscribe_input");
    }
}
