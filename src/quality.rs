//! Chord qualities and their interval formulas.
//!
//! Every supported quality is a variant of the closed [`Quality`] enum, so an
//! invalid quality is unrepresentable once resolved. Each variant carries an
//! interval formula (ordered semitone offsets from the root, first element
//! always 0), the canonical input token, the accepted alias tokens, and a
//! category used for grouping and for the search ranking penalties.
//!
//! The formulas cover triads, suspensions, sixth chords, sevenths,
//! extensions to the 13th, add/omit voicings, altered dominants,
//! parenthesized tension forms, and augmented extensions.

use serde::{Serialize, Serializer};

/// Grouping for chord qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Basic,
    Suspended,
    Seventh,
    Extended,
    Add,
    Omit,
    Altered,
    Tension,
    Augmented,
    Diminished,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Basic,
        Category::Suspended,
        Category::Seventh,
        Category::Extended,
        Category::Add,
        Category::Omit,
        Category::Altered,
        Category::Tension,
        Category::Augmented,
        Category::Diminished,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Basic => "Basic triads",
            Category::Suspended => "Suspended",
            Category::Seventh => "Sevenths",
            Category::Extended => "Extended",
            Category::Add => "Add",
            Category::Omit => "Omit",
            Category::Altered => "Altered dominants",
            Category::Tension => "Tensions",
            Category::Augmented => "Augmented",
            Category::Diminished => "Diminished",
        }
    }
}

/// A chord quality. Variant order matches the definition table below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
    Dim,
    Aug,
    Sus2,
    Sus4,
    SevenSus4,
    NineSus4,
    Seven,
    Maj7,
    Min7,
    Dim7,
    Min7Flat5,
    MinMaj7,
    Aug7,
    Maj7Sharp5,
    Six,
    Min6,
    SixNine,
    Maj6Nine,
    Nine,
    Maj9,
    Min9,
    MinMaj9,
    Min11,
    MinMaj11,
    Thirteen,
    Min13,
    MinMaj13,
    Add9,
    Add2,
    Add4,
    Add6,
    Add11,
    AddSharp11,
    Add13,
    AddSharp13,
    Omit3,
    Five,
    Omit5,
    MinOmit5,
    SevenOmit5,
    Maj7Omit5,
    Min7Omit5,
    Maj7Omit3,
    SevenOmit3,
    Sus2Omit5,
    Sus4Omit5,
    SevenSus4Omit5,
    NineOmit5,
    Min9Omit5,
    SevenFlat9,
    SevenSharp9,
    SevenFlat5,
    SevenAlt,
    NineFlat5,
    Seven9,
    Seven13,
    Seven9And13,
    SevenFlat9Flat13,
    SevenFlat5Sharp9,
    SevenSharp5Flat9,
    SevenSharp9Sharp11,
    SevenFlat9Sharp11,
    Seven9Sharp11And13,
    Min7Nine,
    Min7Eleven,
    Min7NineEleven,
    Min7Flat5Eleven,
    Maj7Nine,
    Maj7Thirteen,
    Maj7NineThirteen,
    Aug7Flat9,
    Aug9Sharp11,
    Aug7Sharp9,
    Tension9,
    Tension11,
}

/// Full definition of one quality: formula, tokens, presentation.
pub struct QualityDef {
    pub quality: Quality,
    pub token: &'static str,
    pub intervals: &'static [u8],
    pub aliases: &'static [&'static str],
    pub display_name: &'static str,
    pub category: Category,
}

const fn def(
    quality: Quality,
    token: &'static str,
    intervals: &'static [u8],
    aliases: &'static [&'static str],
    display_name: &'static str,
    category: Category,
) -> QualityDef {
    QualityDef {
        quality,
        token,
        intervals,
        aliases,
        display_name,
        category,
    }
}

/// The quality catalogue. Indexed by `Quality` discriminant; the order here
/// must match the enum declaration.
pub(crate) static QUALITIES: &[QualityDef] = &[
    def(Quality::Major, "maj", &[0, 4, 7], &[], "Major", Category::Basic),
    def(Quality::Minor, "m", &[0, 3, 7], &["min", "minor", "mi", "-"], "Minor", Category::Basic),
    def(Quality::Dim, "dim", &[0, 3, 6], &["diminished", "o", "°"], "Diminished", Category::Diminished),
    def(Quality::Aug, "aug", &[0, 4, 8], &["+5", "augmented", "+", "#5"], "Augmented", Category::Augmented),
    def(Quality::Sus2, "sus2", &[0, 2, 7], &["suspended2"], "Suspended 2nd", Category::Suspended),
    def(Quality::Sus4, "sus4", &[0, 5, 7], &["sus", "suspended4", "suspended"], "Suspended 4th", Category::Suspended),
    def(Quality::SevenSus4, "7sus4", &[0, 5, 7, 10], &[], "7th suspended 4th", Category::Suspended),
    def(Quality::NineSus4, "9sus4", &[0, 5, 7, 10, 14], &[], "9th suspended 4th", Category::Suspended),
    def(Quality::Seven, "7", &[0, 4, 7, 10], &["dom7", "dominant7"], "Dominant 7th", Category::Seventh),
    def(Quality::Maj7, "maj7", &[0, 4, 7, 11], &["M7", "major7", "Maj7", "MA7", "Ma7", "△7", "j7", "△"], "Major 7th", Category::Seventh),
    def(Quality::Min7, "m7", &[0, 3, 7, 10], &["min7", "minor7", "mi7", "-7"], "Minor 7th", Category::Seventh),
    def(Quality::Dim7, "dim7", &[0, 3, 6, 9], &["diminished7", "o7", "°7"], "Diminished 7th", Category::Diminished),
    def(Quality::Min7Flat5, "m7b5", &[0, 3, 6, 10], &["half-dim", "ø", "m7♭5", "m7-5", "ø7"], "Half-diminished 7th", Category::Diminished),
    def(Quality::MinMaj7, "mM7", &[0, 3, 7, 11], &["mMaj7", "mMA7", "minmaj7", "mmaj7"], "Minor-major 7th", Category::Seventh),
    def(Quality::Aug7, "aug7", &[0, 4, 8, 10], &["7+5", "7#5"], "Augmented 7th", Category::Augmented),
    def(Quality::Maj7Sharp5, "maj7+5", &[0, 4, 8, 11], &["augM7", "augMaj7"], "Major 7th sharp 5", Category::Augmented),
    def(Quality::Six, "6", &[0, 4, 7, 9], &["sixth"], "Major 6th", Category::Add),
    def(Quality::Min6, "m6", &[0, 3, 7, 9], &[], "Minor 6th", Category::Add),
    def(Quality::SixNine, "6/9", &[0, 4, 7, 9, 14], &["6add9", "69"], "6th with 9th", Category::Extended),
    def(Quality::Maj6Nine, "maj6/9", &[0, 4, 7, 9, 14], &["maj69", "M69"], "Major 6th with 9th", Category::Extended),
    def(Quality::Nine, "9", &[0, 4, 7, 10, 14], &["ninth"], "Dominant 9th", Category::Extended),
    def(Quality::Maj9, "maj9", &[0, 4, 7, 11, 14], &["M9"], "Major 9th", Category::Extended),
    def(Quality::Min9, "m9", &[0, 3, 7, 10, 14], &[], "Minor 9th", Category::Extended),
    def(Quality::MinMaj9, "mM9", &[0, 3, 7, 11, 14], &["minmaj9", "mmaj9", "mMA9"], "Minor-major 9th", Category::Extended),
    def(Quality::Min11, "m11", &[0, 3, 7, 10, 14, 17], &[], "Minor 11th", Category::Extended),
    def(Quality::MinMaj11, "mM11", &[0, 3, 7, 11, 14, 17], &["minmaj11", "mmaj11", "mMA11"], "Minor-major 11th", Category::Extended),
    def(Quality::Thirteen, "13", &[0, 4, 7, 10, 14, 21], &[], "Dominant 13th", Category::Extended),
    def(Quality::Min13, "m13", &[0, 3, 7, 10, 14, 21], &[], "Minor 13th", Category::Extended),
    def(Quality::MinMaj13, "mM13", &[0, 3, 7, 11, 14, 17, 21], &["minmaj13", "mmaj13", "mMA13"], "Minor-major 13th", Category::Extended),
    def(Quality::Add9, "add9", &[0, 4, 7, 14], &[], "Add 9th", Category::Add),
    def(Quality::Add2, "add2", &[0, 2, 4, 7], &[], "Add 2nd", Category::Add),
    def(Quality::Add4, "add4", &[0, 4, 5, 7], &[], "Add 4th", Category::Add),
    def(Quality::Add6, "add6", &[0, 4, 7, 9], &[], "Add 6th", Category::Add),
    def(Quality::Add11, "add11", &[0, 4, 7, 17], &[], "Add 11th", Category::Add),
    def(Quality::AddSharp11, "add#11", &[0, 4, 7, 18], &[], "Add sharp 11th", Category::Add),
    def(Quality::Add13, "add13", &[0, 4, 7, 21], &[], "Add 13th", Category::Add),
    def(Quality::AddSharp13, "add#13", &[0, 4, 7, 22], &[], "Add sharp 13th", Category::Add),
    def(Quality::Omit3, "omit3", &[0, 7], &["no3"], "Omit 3rd", Category::Omit),
    def(Quality::Five, "5", &[0, 7], &[], "Power chord", Category::Omit),
    def(Quality::Omit5, "omit5", &[0, 4], &["no5"], "Omit 5th", Category::Omit),
    def(Quality::MinOmit5, "m(omit5)", &[0, 3], &[], "Minor omit 5th", Category::Omit),
    def(Quality::SevenOmit5, "7omit5", &[0, 4, 10], &[], "7th omit 5th", Category::Omit),
    def(Quality::Maj7Omit5, "maj7omit5", &[0, 4, 11], &[], "Major 7th omit 5th", Category::Omit),
    def(Quality::Min7Omit5, "m7omit5", &[0, 3, 10], &[], "Minor 7th omit 5th", Category::Omit),
    def(Quality::Maj7Omit3, "maj7(omit3)", &[0, 7, 11], &[], "Major 7th omit 3rd", Category::Omit),
    def(Quality::SevenOmit3, "7omit3", &[0, 7, 10], &[], "7th omit 3rd", Category::Omit),
    def(Quality::Sus2Omit5, "sus2omit5", &[0, 2], &[], "Sus2 omit 5th", Category::Omit),
    def(Quality::Sus4Omit5, "sus4omit5", &[0, 5], &[], "Sus4 omit 5th", Category::Omit),
    def(Quality::SevenSus4Omit5, "7sus4omit5", &[0, 5, 10], &[], "7th sus4 omit 5th", Category::Omit),
    def(Quality::NineOmit5, "9omit5", &[0, 4, 10, 14], &[], "9th omit 5th", Category::Omit),
    def(Quality::Min9Omit5, "m9omit5", &[0, 3, 10, 14], &[], "Minor 9th omit 5th", Category::Omit),
    def(Quality::SevenFlat9, "7b9", &[0, 4, 7, 10, 13], &[], "7th flat 9", Category::Altered),
    def(Quality::SevenSharp9, "7#9", &[0, 4, 7, 10, 15], &[], "7th sharp 9", Category::Altered),
    def(Quality::SevenFlat5, "7b5", &[0, 4, 6, 10], &["-5", "7-5"], "7th flat 5", Category::Altered),
    def(Quality::SevenAlt, "7alt", &[0, 4, 6, 10, 13, 15], &["alt", "7altered", "altered"], "Altered dominant", Category::Altered),
    def(Quality::NineFlat5, "9b5", &[0, 4, 6, 10, 14], &["b5", "(b5)", "9(b5)"], "9th flat 5", Category::Altered),
    def(Quality::Seven9, "7(9)", &[0, 4, 7, 10, 14], &[], "7th with 9th", Category::Tension),
    def(Quality::Seven13, "7(13)", &[0, 4, 7, 10, 21], &["(13)"], "7th with 13th", Category::Tension),
    def(Quality::Seven9And13, "7(9,13)", &[0, 4, 7, 10, 14, 21], &[], "7th with 9th and 13th", Category::Tension),
    def(Quality::SevenFlat9Flat13, "7(b9,b13)", &[0, 4, 7, 10, 13, 20], &[], "7th with flat 9 and flat 13", Category::Tension),
    def(Quality::SevenFlat5Sharp9, "7(b5,#9)", &[0, 4, 6, 10, 15], &["(b5,#9)"], "7th flat 5 sharp 9", Category::Altered),
    def(Quality::SevenSharp5Flat9, "7(#5,b9)", &[0, 4, 8, 10, 13], &["(#5,b9)"], "7th sharp 5 flat 9", Category::Altered),
    def(Quality::SevenSharp9Sharp11, "7(#9,#11)", &[0, 4, 7, 10, 15, 18], &["(#9,#11)"], "7th sharp 9 sharp 11", Category::Tension),
    def(Quality::SevenFlat9Sharp11, "7(b9,#11)", &[0, 4, 7, 10, 13, 18], &["(b9,#11)"], "7th flat 9 sharp 11", Category::Tension),
    def(Quality::Seven9Sharp11And13, "7(9,#11,13)", &[0, 4, 7, 10, 14, 18, 21], &[], "7th with 9, #11, 13", Category::Tension),
    def(Quality::Min7Nine, "m7(9)", &[0, 3, 7, 10, 14], &[], "Minor 7th with 9th", Category::Tension),
    def(Quality::Min7Eleven, "m7(11)", &[0, 3, 7, 10, 17], &[], "Minor 7th with 11th", Category::Tension),
    def(Quality::Min7NineEleven, "m7(9,11)", &[0, 3, 7, 10, 14, 17], &["(9,11)"], "Minor 7th with 9th and 11th", Category::Tension),
    def(Quality::Min7Flat5Eleven, "m7b5(11)", &[0, 3, 6, 10, 17], &["-5(11)", "m7-5(11)"], "Half-diminished with 11th", Category::Diminished),
    def(Quality::Maj7Nine, "maj7(9)", &[0, 4, 7, 11, 14], &["M7(9)"], "Major 7th with 9th", Category::Tension),
    def(Quality::Maj7Thirteen, "maj7(13)", &[0, 4, 7, 11, 21], &[], "Major 7th with 13th", Category::Tension),
    def(Quality::Maj7NineThirteen, "maj7(9,13)", &[0, 4, 7, 11, 14, 21], &[], "Major 7th with 9th and 13th", Category::Tension),
    def(Quality::Aug7Flat9, "aug7(b9)", &[0, 4, 8, 10, 13], &[], "Augmented 7th flat 9", Category::Augmented),
    def(Quality::Aug9Sharp11, "aug9(#11)", &[0, 4, 8, 10, 14, 18], &[], "Augmented 9th sharp 11", Category::Augmented),
    def(Quality::Aug7Sharp9, "aug7#9", &[0, 4, 8, 10, 15], &["aug7(#9)"], "Augmented 7th sharp 9", Category::Augmented),
    def(Quality::Tension9, "(9)", &[0, 4, 7, 10, 14], &[], "Tension 9th", Category::Tension),
    def(Quality::Tension11, "(11)", &[0, 4, 7, 10, 17], &[], "Tension 11th", Category::Tension),
];

impl Quality {
    fn definition(&self) -> &'static QualityDef {
        &QUALITIES[*self as usize]
    }

    /// Every quality, in catalogue order.
    pub fn all() -> impl Iterator<Item = Quality> {
        QUALITIES.iter().map(|d| d.quality)
    }

    /// The canonical input token, e.g. `"m7b5"`.
    pub fn token(&self) -> &'static str {
        self.definition().token
    }

    /// The suffix used when rendering a chord symbol. Identical to the token
    /// except for `Major`, which renders as the bare root.
    pub fn suffix(&self) -> &'static str {
        match self {
            Quality::Major => "",
            other => other.token(),
        }
    }

    /// Ordered semitone offsets from the root. The first element is always 0.
    pub fn intervals(&self) -> &'static [u8] {
        self.definition().intervals
    }

    /// Alternate input tokens accepted for this quality.
    pub fn aliases(&self) -> &'static [&'static str] {
        self.definition().aliases
    }

    pub fn display_name(&self) -> &'static str {
        self.definition().display_name
    }

    pub fn category(&self) -> Category {
        self.definition().category
    }
}

// Serialize as the canonical token.
impl Serialize for Quality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}
