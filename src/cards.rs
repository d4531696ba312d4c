use std::fmt;
use std::str::FromStr;

/// Card ranks from Ace (1) to King (13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`]; `None` outside `1..=13`.
    pub const fn from_value(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::Ace),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let r = match upper.as_str() {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// The four suits. Suits carry no strength; the order is fixed for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
            Suit::Diamond => 'd',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "spade" | "spades" => Ok(Suit::Spade),
            "heart" | "hearts" => Ok(Suit::Heart),
            "club" | "clubs" => Ok(Suit::Club),
            "diamond" | "diamonds" => Ok(Suit::Diamond),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            's' | '♠' => Ok(Suit::Spade),
            'h' | '♥' => Ok(Suit::Heart),
            'c' | '♣' => Ok(Suit::Club),
            'd' | '♦' => Ok(Suit::Diamond),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// What is printed on a card: rank + suit. Several physical cards may share a face
/// when more than one deck is in play.
///
/// ```
/// use poker_hands::cards::{Face, Rank, Suit};
///
/// let face: Face = "10h".parse().unwrap();
/// assert_eq!(face, Face::new(Rank::Ten, Suit::Heart));
/// assert_eq!(face.to_string(), "Th");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face {
    rank: Rank,
    suit: Suit,
}

impl Face {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FaceParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Face {
    type Err = FaceParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // suit is the last char, rank is everything before it ("10h" included)
        let suit_ch = t.chars().last().ok_or_else(|| FaceParseError::Invalid(s.to_string()))?;
        let rank_str = &t[..t.len() - suit_ch.len_utf8()];
        if rank_str.is_empty() {
            return Err(FaceParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Face::new(rank, suit))
    }
}

/// Parse multiple faces separated by whitespace or commas.
pub fn parse_faces(input: &str) -> Result<Vec<Face>, FaceParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Face::from_str)
        .collect()
}

/// Opaque identity of one physical card. Two cards with the same face from
/// different decks have different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(u32);

impl CardId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A physical card: a face plus the id that distinguishes it from identical faces.
///
/// Equality and hashing include the id, so two aces of spades from
/// different decks are different cards.
///
/// ```
/// use poker_hands::cards::{Card, CardId, Rank, Suit};
///
/// let card = Card::new(CardId::new(7), Rank::Ace, Suit::Spade);
/// assert_eq!(card.to_string(), "As#7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    id: CardId,
    face: Face,
}

impl Card {
    pub const fn new(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self { id, face: Face::new(rank, suit) }
    }

    pub const fn from_face(id: CardId, face: Face) -> Self {
        Self { id, face }
    }

    pub const fn id(self) -> CardId {
        self.id
    }

    pub const fn face(self) -> Face {
        self.face
    }

    pub const fn rank(self) -> Rank {
        self.face.rank
    }

    pub const fn suit(self) -> Suit {
        self.face.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.id)
    }
}

/// Give each face a fresh id, numbered from zero in input order.
///
/// ```
/// use poker_hands::cards::{cards_from_str, CardId};
///
/// let cards = cards_from_str("As As Kd").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[0].face(), cards[1].face());
/// assert_ne!(cards[0], cards[1]);
/// assert_eq!(cards[2].id(), CardId::new(2));
/// ```
pub fn cards_from_str(input: &str) -> Result<Vec<Card>, FaceParseError> {
    let faces = parse_faces(input)?;
    Ok(faces.into_iter().zip(0u32..).map(|(face, i)| Card::from_face(CardId::new(i), face)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_run_ace_to_king() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        for r in Rank::ALL {
            assert_eq!(Rank::from_value(r.value()), Some(r));
        }
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("1").unwrap(), Rank::Ace);
        assert!(Rank::from_str("14").is_err());
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Spade.to_string(), "s");
        assert_eq!(Suit::from_str("s").unwrap(), Suit::Spade);
        assert_eq!(Suit::from_str("Hearts").unwrap(), Suit::Heart);
        assert_eq!(Suit::from_str("♦").unwrap(), Suit::Diamond);
        assert!(Suit::from_str("x").is_err());
    }

    #[test]
    fn face_from_str() {
        assert_eq!(Face::from_str("As").unwrap(), Face::new(Rank::Ace, Suit::Spade));
        assert_eq!(Face::from_str("10d").unwrap(), Face::new(Rank::Ten, Suit::Diamond));
        assert_eq!(Face::from_str("kh").unwrap(), Face::new(Rank::King, Suit::Heart));
        assert!(Face::from_str("s").is_err());
        assert!(Face::from_str("").is_err());
        assert!(matches!(Face::from_str("Zs"), Err(FaceParseError::Rank(_))));
        assert!(matches!(Face::from_str("Ax"), Err(FaceParseError::Suit(_))));
    }

    #[test]
    fn card_identity_is_the_id() {
        let a = Card::new(CardId::new(0), Rank::Ace, Suit::Spade);
        let b = Card::new(CardId::new(1), Rank::Ace, Suit::Spade);
        assert_eq!(a.face(), b.face());
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "As#0");
    }

    #[test]
    fn parse_many_faces() {
        let xs = parse_faces("As, Kd 10c").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[0], Face::new(Rank::Ace, Suit::Spade));
        assert_eq!(xs[1], Face::new(Rank::King, Suit::Diamond));
        assert_eq!(xs[2], Face::new(Rank::Ten, Suit::Club));
    }
}
