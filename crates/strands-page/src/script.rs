//! Scripted page sessions.
//!
//! A script is a list of steps, one per token, replayed against a [`Page`]:
//!
//! | Step | Event |
//! |------|-------|
//! | `load` | page loaded |
//! | `toggle` | theme toggle clicked |
//! | `key:<name>` | key pressed on the theme toggle (`key:Enter`, `key:Space`) |
//! | `system:dark`, `system:light` | OS color scheme changed |
//! | `menu` | menu toggle clicked |
//! | `outside`, `inside` | document click outside / inside the menu |
//! | `navlink` | mobile nav link clicked |
//! | `submit:<email>` | subscribe form submitted |
//! | `frame:ok`, `frame:error` | game frame loaded / failed |
//! | `retry` | frame retry clicked |
//! | `anchor:<href>`, `mobile-anchor:<href>` | in-page link clicked |
//! | `card:<href>` | feature card clicked |
//! | `wait:<ms>` | page clock advanced |

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::effect::Effect;
use crate::links::Layout;
use crate::page::{Page, PageEvent};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown step '{0}'")]
    UnknownStep(String),

    #[error("invalid wait '{0}', expected milliseconds")]
    InvalidWait(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Event(PageEvent),
    Wait(Duration),
}

impl Step {
    pub fn parse(token: &str) -> Result<Self, ScriptError> {
        let (head, arg) = match token.split_once(':') {
            Some((head, arg)) => (head, Some(arg)),
            None => (token, None),
        };
        let event = match (head, arg) {
            ("load", None) => PageEvent::Loaded,
            ("toggle", None) => PageEvent::ThemeToggleClicked,
            ("key", Some(key)) => PageEvent::ThemeToggleKey(key.to_string()),
            ("system", Some("dark")) => PageEvent::SystemSchemeChanged { prefers_dark: true },
            ("system", Some("light")) => PageEvent::SystemSchemeChanged {
                prefers_dark: false,
            },
            ("menu", None) => PageEvent::MenuToggleClicked,
            ("outside", None) => PageEvent::DocumentClicked { inside_menu: false },
            ("inside", None) => PageEvent::DocumentClicked { inside_menu: true },
            ("navlink", None) => PageEvent::NavLinkClicked,
            ("submit", Some(email)) => PageEvent::SubscribeSubmitted {
                email: email.to_string(),
            },
            ("frame", Some("ok")) => PageEvent::FrameLoaded,
            ("frame", Some("error")) => PageEvent::FrameFailed,
            ("retry", None) => PageEvent::FrameRetry,
            ("anchor", Some(href)) => PageEvent::AnchorClicked {
                href: href.to_string(),
                from_mobile_nav: false,
            },
            ("mobile-anchor", Some(href)) => PageEvent::AnchorClicked {
                href: href.to_string(),
                from_mobile_nav: true,
            },
            ("card", Some(href)) => PageEvent::FeatureCardClicked {
                href: href.to_string(),
            },
            ("wait", Some(ms)) => {
                let ms: u64 = ms
                    .parse()
                    .map_err(|_| ScriptError::InvalidWait(token.to_string()))?;
                return Ok(Step::Wait(Duration::from_millis(ms)));
            }
            _ => return Err(ScriptError::UnknownStep(token.to_string())),
        };
        Ok(Step::Event(event))
    }
}

/// The effects one step produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: String,
    pub effects: Vec<Effect>,
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.step)?;
        if self.effects.is_empty() {
            return write!(f, "\n  (no effects)");
        }
        for effect in &self.effects {
            write!(f, "\n  {}", effect)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<(String, Step)>,
}

impl Script {
    /// Parses whitespace-separated steps.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        Self::from_steps(text.split_whitespace())
    }

    pub fn from_steps<I, S>(tokens: I) -> Result<Self, ScriptError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let steps = tokens
            .into_iter()
            .map(|token| {
                let token = token.as_ref();
                Step::parse(token).map(|step| (token.to_string(), step))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Replays every step against `page`.
    pub fn run<L: Layout>(&self, page: &mut Page<L>) -> Vec<StepOutcome> {
        self.steps
            .iter()
            .map(|(token, step)| {
                let effects = match step {
                    Step::Event(event) => page.dispatch(event.clone()),
                    Step::Wait(duration) => page.advance(*duration),
                };
                StepOutcome {
                    step: token.clone(),
                    effects,
                }
            })
            .collect()
    }
}
