//! Word cards - the static content of the game.
//!
//! A `WordCard` is the word the describer must get across plus the
//! forbidden words they may not say. Cards come from bundled category
//! files or are authored by the user, and never change once created.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a word card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Difficulty tier of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Where a card came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardOrigin {
    /// Shipped with the game in a category file.
    #[default]
    Bundled,
    /// Written by the user.
    Custom,
}

/// Which of a card's two texts to display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// The card's original text.
    #[default]
    Primary,
    /// The card's translation, falling back to the original when absent.
    Translated,
}

/// Forbidden-word list. Cards carry at most five.
pub type WordList = SmallVec<[String; 5]>;

/// Immutable word card.
///
/// ## Example
///
/// ```
/// use taboo_engine::cards::{CardId, Language, WordCard};
///
/// let card = WordCard::new(CardId::new(1), "Kedi")
///     .with_forbidden(["Miyav", "Hayvan", "Tekir"])
///     .with_translation("Cat", ["Meow", "Animal", "Tabby"])
///     .with_tag("animals");
///
/// assert_eq!(card.text(Language::Translated), "Cat");
/// assert_eq!(card.forbidden(Language::Primary).len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCard {
    id: CardId,
    primary_text: String,
    #[serde(default)]
    translated_text: Option<String>,
    #[serde(default)]
    forbidden_words: WordList,
    #[serde(default)]
    translated_forbidden_words: WordList,
    #[serde(default)]
    category_tags: SmallVec<[String; 2]>,
    #[serde(default)]
    difficulty: Difficulty,
    #[serde(default)]
    origin: CardOrigin,
}

impl WordCard {
    /// Create a card with no forbidden words.
    #[must_use]
    pub fn new(id: CardId, primary_text: impl Into<String>) -> Self {
        Self {
            id,
            primary_text: primary_text.into(),
            translated_text: None,
            forbidden_words: WordList::new(),
            translated_forbidden_words: WordList::new(),
            category_tags: SmallVec::new(),
            difficulty: Difficulty::default(),
            origin: CardOrigin::default(),
        }
    }

    #[must_use]
    pub fn with_forbidden<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_words = words.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_translation<I, S>(mut self, text: impl Into<String>, forbidden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.translated_text = Some(text.into());
        self.translated_forbidden_words = forbidden.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.category_tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Mark the card as user-authored.
    #[must_use]
    pub fn custom(mut self) -> Self {
        self.origin = CardOrigin::Custom;
        self
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn primary_text(&self) -> &str {
        &self.primary_text
    }

    #[must_use]
    pub fn translated_text(&self) -> Option<&str> {
        self.translated_text.as_deref()
    }

    #[must_use]
    pub fn forbidden_words(&self) -> &[String] {
        &self.forbidden_words
    }

    #[must_use]
    pub fn translated_forbidden_words(&self) -> &[String] {
        &self.translated_forbidden_words
    }

    #[must_use]
    pub fn category_tags(&self) -> &[String] {
        &self.category_tags
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn origin(&self) -> CardOrigin {
        self.origin
    }

    /// Check whether the card carries a category tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.category_tags.iter().any(|t| t == tag)
    }

    /// The word to describe in the given language.
    #[must_use]
    pub fn text(&self, language: Language) -> &str {
        match language {
            Language::Primary => self.primary_text.as_str(),
            Language::Translated => self.translated_text.as_deref().unwrap_or(&self.primary_text),
        }
    }

    /// The forbidden words in the given language.
    ///
    /// Falls back to the primary list when no translated list exists.
    #[must_use]
    pub fn forbidden(&self, language: Language) -> &[String] {
        match language {
            Language::Translated if !self.translated_forbidden_words.is_empty() => {
                self.translated_forbidden_words.as_slice()
            }
            _ => self.forbidden_words.as_slice(),
        }
    }
}
