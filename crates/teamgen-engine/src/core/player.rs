use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// Unique identifier of a player within a roster.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new<S>(id: S) -> Self
    where
        S: Into<String>,
    {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Where a player lines up.
///
/// The balancer only distinguishes goalkeepers from everyone else; the
/// three field roles are kept so results can be rendered back faithfully.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(try_from = "String")]
pub enum Position {
    #[display("forward")]
    Forward,
    #[display("defender")]
    Defender,
    #[display("forward/defender")]
    ForwardDefender,
    #[display("goalkeeper")]
    Goalkeeper,
}

impl Position {
    pub const ALL: [Self; 4] = [
        Self::Forward,
        Self::Defender,
        Self::ForwardDefender,
        Self::Goalkeeper,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Defender => "defender",
            Self::ForwardDefender => "forward/defender",
            Self::Goalkeeper => "goalkeeper",
        }
    }

    /// Returns `true` for any non-goalkeeper role.
    #[must_use]
    pub const fn is_field(self) -> bool {
        !matches!(self, Self::Goalkeeper)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown player position: {input:?}")]
pub struct ParsePositionError {
    input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Self::Forward),
            "defender" => Ok(Self::Defender),
            "forward/defender" | "forward-defender" => Ok(Self::ForwardDefender),
            "goalkeeper" | "keeper" | "gk" => Ok(Self::Goalkeeper),
            _ => Err(ParsePositionError {
                input: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = ParsePositionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

const fn default_active() -> bool {
    true
}

/// A registered player as supplied by the roster.
///
/// `multiplier` is the skill rating: the lower it is, the stronger the
/// player. Points default to `multiplier * 100` unless set explicitly.
///
/// # Example
///
/// ```
/// use teamgen_engine::{Player, Position};
///
/// let player = Player::new("p1", 1, 1.25, Position::Forward);
/// assert_eq!(player.points(), 125.0);
///
/// let player = player.with_points(90.0);
/// assert_eq!(player.points(), 90.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: u8,
    pub multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    pub position: Position,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Player {
    /// Creates an active player without a display name or explicit points.
    #[must_use]
    pub fn new<I>(id: I, category: u8, multiplier: f64, position: Position) -> Self
    where
        I: Into<PlayerId>,
    {
        Self {
            id: id.into(),
            name: None,
            category,
            multiplier,
            points: None,
            position,
            is_active: true,
        }
    }

    #[must_use]
    pub fn with_name<S>(mut self, name: S) -> Self
    where
        S: Into<String>,
    {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: f64) -> Self {
        self.points = Some(points);
        self
    }

    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Points this player contributes to its team's total.
    #[must_use]
    pub fn points(&self) -> f64 {
        self.points.unwrap_or(self.multiplier * 100.0)
    }

    #[must_use]
    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }
}
