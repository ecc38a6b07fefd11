use crate::models::{BasicInfo, CandidateProfile, MatchPreferences, Personality};

/// Single-value attributes compared by exact equality.
///
/// The first five live on the basic-info sub-record, the rest on the
/// personality sub-record. `ALL` fixes the summation order of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    AgeRange,
    MaritalStatus,
    CountryOfOrigin,
    Tribe,
    SkinTone,
    Height,
    EyeColour,
    BodyType,
    HairColour,
    HairStyle,
    Religion,
    Education,
}

impl ScalarField {
    pub const ALL: [ScalarField; 12] = [
        ScalarField::AgeRange,
        ScalarField::MaritalStatus,
        ScalarField::CountryOfOrigin,
        ScalarField::Tribe,
        ScalarField::SkinTone,
        ScalarField::Height,
        ScalarField::EyeColour,
        ScalarField::BodyType,
        ScalarField::HairColour,
        ScalarField::HairStyle,
        ScalarField::Religion,
        ScalarField::Education,
    ];
}

/// Comma-separated list attributes compared by normalized token-set overlap.
///
/// `languages` is list-valued here ("English, French"), not an exact-match
/// scalar. All of these live on the personality sub-record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiField {
    Languages,
    Interest,
    Hobbies,
    Movies,
    Music,
    Activities,
    Values,
    Personality,
}

impl MultiField {
    pub const ALL: [MultiField; 8] = [
        MultiField::Languages,
        MultiField::Interest,
        MultiField::Hobbies,
        MultiField::Movies,
        MultiField::Music,
        MultiField::Activities,
        MultiField::Values,
        MultiField::Personality,
    ];
}

/// Flattened read-only view of one candidate's scorable attributes.
///
/// The calculator queries fields through this view and never learns which
/// sub-record a field lives on. Construction requires the personality record,
/// so incomplete candidates cannot reach the scoring path.
#[derive(Debug, Clone, Copy)]
pub struct AttributeView<'a> {
    basic_info: Option<&'a BasicInfo>,
    personality: &'a Personality,
}

impl<'a> AttributeView<'a> {
    pub fn new(basic_info: Option<&'a BasicInfo>, personality: &'a Personality) -> Self {
        Self {
            basic_info,
            personality,
        }
    }

    /// Build a view over a candidate, or `None` when the candidate has no
    /// personality record and must be skipped.
    pub fn of(candidate: &'a CandidateProfile) -> Option<Self> {
        candidate
            .personality
            .as_ref()
            .map(|personality| Self::new(candidate.basic_info.as_ref(), personality))
    }

    pub fn scalar(&self, field: ScalarField) -> Option<&'a str> {
        match field {
            ScalarField::AgeRange => self.basic(|b| &b.age_range),
            ScalarField::MaritalStatus => self.basic(|b| &b.marital_status),
            ScalarField::CountryOfOrigin => self.basic(|b| &b.country_of_origin),
            ScalarField::Tribe => self.basic(|b| &b.tribe),
            ScalarField::SkinTone => self.basic(|b| &b.skin_tone),
            ScalarField::Height => self.personality.height.as_deref(),
            ScalarField::EyeColour => self.personality.eye_colour.as_deref(),
            ScalarField::BodyType => self.personality.body_type.as_deref(),
            ScalarField::HairColour => self.personality.hair_colour.as_deref(),
            ScalarField::HairStyle => self.personality.hair_style.as_deref(),
            ScalarField::Religion => self.personality.religion.as_deref(),
            ScalarField::Education => self.personality.education.as_deref(),
        }
    }

    pub fn multi(&self, field: MultiField) -> Option<&'a str> {
        match field {
            MultiField::Languages => self.personality.languages.as_deref(),
            MultiField::Interest => self.personality.interest.as_deref(),
            MultiField::Hobbies => self.personality.hobbies.as_deref(),
            MultiField::Movies => self.personality.movies.as_deref(),
            MultiField::Music => self.personality.music.as_deref(),
            MultiField::Activities => self.personality.activities.as_deref(),
            MultiField::Values => self.personality.values.as_deref(),
            MultiField::Personality => self.personality.personality.as_deref(),
        }
    }

    fn basic(&self, get: impl Fn(&'a BasicInfo) -> &'a Option<String>) -> Option<&'a str> {
        self.basic_info.and_then(|b| get(b).as_deref())
    }
}

impl MatchPreferences {
    /// The requested value for a scalar field, if set.
    pub fn scalar(&self, field: ScalarField) -> Option<&str> {
        match field {
            ScalarField::AgeRange => self.age_range.as_deref(),
            ScalarField::MaritalStatus => self.marital_status.as_deref(),
            ScalarField::CountryOfOrigin => self.country_of_origin.as_deref(),
            ScalarField::Tribe => self.tribe.as_deref(),
            ScalarField::SkinTone => self.skin_tone.as_deref(),
            ScalarField::Height => self.height.as_deref(),
            ScalarField::EyeColour => self.eye_colour.as_deref(),
            ScalarField::BodyType => self.body_type.as_deref(),
            ScalarField::HairColour => self.hair_colour.as_deref(),
            ScalarField::HairStyle => self.hair_style.as_deref(),
            ScalarField::Religion => self.religion.as_deref(),
            ScalarField::Education => self.education.as_deref(),
        }
    }

    /// The requested list for a multi-value field, if set.
    pub fn multi(&self, field: MultiField) -> Option<&str> {
        match field {
            MultiField::Languages => self.languages.as_deref(),
            MultiField::Interest => self.interest.as_deref(),
            MultiField::Hobbies => self.hobbies.as_deref(),
            MultiField::Movies => self.movies.as_deref(),
            MultiField::Music => self.music.as_deref(),
            MultiField::Activities => self.activities.as_deref(),
            MultiField::Values => self.values.as_deref(),
            MultiField::Personality => self.personality.as_deref(),
        }
    }
}
