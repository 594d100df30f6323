//! Outbound speech responses

use serde::Serialize;

/// The terminal action for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechResponse {
    /// Speak and end the session
    Tell { text: String },
    /// Speak, attach a permissions consent card, and end the session
    TellWithCard {
        text: String,
        permissions: Vec<String>,
    },
    /// Speak and keep the session open for a reply
    Ask { text: String, reprompt: String },
}

impl SpeechResponse {
    #[must_use]
    pub fn tell(text: impl Into<String>) -> Self {
        Self::Tell { text: text.into() }
    }

    #[must_use]
    pub fn tell_with_permission_card(text: impl Into<String>, permissions: &[&str]) -> Self {
        Self::TellWithCard {
            text: text.into(),
            permissions: permissions.iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn ask(text: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self::Ask {
            text: text.into(),
            reprompt: reprompt.into(),
        }
    }

    /// Spoken text
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Tell { text } | Self::TellWithCard { text, .. } | Self::Ask { text, .. } => {
                text.as_str()
            }
        }
    }

    #[must_use]
    pub const fn ends_session(&self) -> bool {
        !matches!(self, Self::Ask { .. })
    }
}

/// Response envelope returned to the voice platform
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub session_attributes: serde_json::Map<String, serde_json::Value>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl OutputSpeech {
    fn plain(text: &str) -> Self {
        Self {
            kind: "PlainText",
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl ResponseEnvelope {
    /// Envelope with no speech, for requests that take no reply
    #[must_use]
    pub fn empty() -> Self {
        Self {
            version: "1.0",
            session_attributes: serde_json::Map::new(),
            response: ResponseBody::default(),
        }
    }
}

impl From<&SpeechResponse> for ResponseEnvelope {
    fn from(speech: &SpeechResponse) -> Self {
        let card = match speech {
            SpeechResponse::TellWithCard { permissions, .. } => Some(Card {
                kind: "AskForPermissionsConsent",
                permissions: permissions.clone(),
            }),
            _ => None,
        };
        let reprompt = match speech {
            SpeechResponse::Ask { reprompt, .. } => Some(Reprompt {
                output_speech: OutputSpeech::plain(reprompt),
            }),
            _ => None,
        };

        Self {
            response: ResponseBody {
                output_speech: Some(OutputSpeech::plain(speech.text())),
                card,
                reprompt,
                should_end_session: Some(speech.ends_session()),
            },
            ..Self::empty()
        }
    }
}
