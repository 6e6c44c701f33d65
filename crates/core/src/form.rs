//! Character form synchronisation.
//!
//! Pure functions that compute what the character form should show: the
//! option list of each select (vocabulary plus an ad-hoc extra entry for
//! unknown values), which option is preselected, and whether the editable
//! fields are locked. Rendering is left to the client.

use serde::{Deserialize, Serialize};

use crate::character::ApiCharacter;
use crate::error::CoreError;
use crate::record::{CharacterRecord, CreateRecord, UpdateRecord};
use crate::types::RecordId;
use crate::universe::Universe;
use crate::vocabulary::FormVocabulary;

/// Label of the empty leading option in every select.
pub const PLACEHOLDER_LABEL: &str = "Selecione...";

/// Rejection message for submissions made before a character was loaded.
pub const LOAD_REQUIRED_MESSAGE: &str =
    "É necessário carregar um personagem da API antes de salvar.";

// ---------------------------------------------------------------------------
// Fields and selects
// ---------------------------------------------------------------------------

/// The editable fields of the character form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Universe,
    Title,
    Body,
    Species,
    ImageUrl,
    Abilities,
}

impl FormField {
    /// Every field affected by [`lock`].
    pub const EDITABLE: [FormField; 6] = [
        FormField::Universe,
        FormField::Title,
        FormField::Body,
        FormField::Species,
        FormField::ImageUrl,
        FormField::Abilities,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
    /// Appended because the current value is outside the vocabulary.
    pub extra: bool,
}

impl SelectOption {
    fn placeholder(selected: bool) -> Self {
        Self {
            value: String::new(),
            label: PLACEHOLDER_LABEL.to_string(),
            selected,
            extra: false,
        }
    }

    fn known(value: &str, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
            selected,
            extra: false,
        }
    }
}

/// A select element's complete option list.
///
/// Exactly one option is selected: the placeholder when there is no current
/// value, otherwise the matching or extra option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectField {
    pub field: FormField,
    pub options: Vec<SelectOption>,
}

impl SelectField {
    /// A select holding nothing but the placeholder, as after a form reset.
    pub fn placeholder_only(field: FormField) -> Self {
        Self {
            field,
            options: vec![SelectOption::placeholder(true)],
        }
    }

    /// Value of the selected option (empty for the placeholder).
    pub fn selected_value(&self) -> &str {
        self.options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.value.as_str())
            .unwrap_or("")
    }
}

/// Rebuild one select from `known` values, preselecting `current`.
///
/// A non-empty `current` missing from `known` is appended as a selected
/// extra option so the value is never dropped.
pub fn populate_select(field: FormField, known: &[String], current: &str) -> SelectField {
    let mut options = Vec::with_capacity(known.len() + 2);
    options.push(SelectOption::placeholder(current.is_empty()));

    let mut matched = false;
    for value in known {
        let selected = !matched && !current.is_empty() && value == current;
        matched |= selected;
        options.push(SelectOption::known(value, selected));
    }

    if !current.is_empty() && !matched {
        options.push(SelectOption {
            value: current.to_string(),
            label: current.to_string(),
            selected: true,
            extra: true,
        });
    }

    SelectField { field, options }
}

/// Values to preselect across the four vocabulary-backed selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentValues {
    pub name: String,
    pub description: String,
    pub abilities: String,
    pub species: String,
}

impl From<&ApiCharacter> for CurrentValues {
    fn from(character: &ApiCharacter) -> Self {
        Self {
            name: character.name.clone(),
            description: character.description.clone(),
            abilities: character.abilities.clone(),
            species: character.species.clone(),
        }
    }
}

impl From<&CharacterRecord> for CurrentValues {
    fn from(record: &CharacterRecord) -> Self {
        Self {
            name: record.title.clone(),
            description: record.body.clone(),
            abilities: record.abilities.clone(),
            species: record.species.clone(),
        }
    }
}

/// The four vocabulary-backed selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSelects {
    pub title: SelectField,
    pub body: SelectField,
    pub abilities: SelectField,
    pub species: SelectField,
}

impl FormSelects {
    pub fn placeholder_only() -> Self {
        Self {
            title: SelectField::placeholder_only(FormField::Title),
            body: SelectField::placeholder_only(FormField::Body),
            abilities: SelectField::placeholder_only(FormField::Abilities),
            species: SelectField::placeholder_only(FormField::Species),
        }
    }
}

/// Populate every select from the vocabulary, preselecting `current` if given.
pub fn populate_all(vocabulary: &FormVocabulary, current: Option<&CurrentValues>) -> FormSelects {
    let empty = CurrentValues::default();
    let current = current.unwrap_or(&empty);

    FormSelects {
        title: populate_select(FormField::Title, &vocabulary.titles, &current.name),
        body: populate_select(FormField::Body, &vocabulary.bodies, &current.description),
        abilities: populate_select(
            FormField::Abilities,
            &vocabulary.abilities,
            &current.abilities,
        ),
        species: populate_select(FormField::Species, &vocabulary.species, &current.species),
    }
}

// ---------------------------------------------------------------------------
// Lock state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldLock {
    pub field: FormField,
    pub read_only: bool,
    pub disabled: bool,
    /// Visual "locked" marker.
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormLock {
    pub locked: bool,
    pub fields: Vec<FieldLock>,
    pub submit_enabled: bool,
}

/// Lock or unlock every editable field and the submit action.
pub fn lock(is_locked: bool) -> FormLock {
    FormLock {
        locked: is_locked,
        fields: FormField::EDITABLE
            .iter()
            .map(|&field| FieldLock {
                field,
                read_only: is_locked,
                disabled: is_locked,
                locked: is_locked,
            })
            .collect(),
        submit_enabled: !is_locked,
    }
}

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// Everything the client needs to render the character form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Set when the form edits an existing record.
    pub editing_id: Option<RecordId>,
    pub universe: String,
    pub image_url: String,
    pub selects: FormSelects,
    pub lock: FormLock,
}

impl FormState {
    /// A cleared, locked form. Edits stay blocked until a character is loaded.
    pub fn reset() -> Self {
        Self {
            editing_id: None,
            universe: String::new(),
            image_url: String::new(),
            selects: FormSelects::placeholder_only(),
            lock: lock(true),
        }
    }

    /// Form after loading a character from an upstream source.
    pub fn for_api_character(
        vocabulary: &FormVocabulary,
        universe: Universe,
        character: &ApiCharacter,
    ) -> Self {
        Self {
            editing_id: None,
            universe: universe.as_str().to_string(),
            image_url: character.image.clone(),
            selects: populate_all(vocabulary, Some(&CurrentValues::from(character))),
            lock: lock(false),
        }
    }

    /// Form for editing a stored record.
    pub fn for_record(vocabulary: &FormVocabulary, record: &CharacterRecord) -> Self {
        Self {
            editing_id: Some(record.id),
            universe: record.universe.clone(),
            image_url: record.image_url.clone(),
            selects: populate_all(vocabulary, Some(&CurrentValues::from(record))),
            lock: lock(false),
        }
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Raw values posted from the character form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSubmission {
    pub editing_id: Option<RecordId>,
    pub title: String,
    pub body: String,
    pub universe: String,
    pub species: String,
    pub image_url: String,
    pub abilities: String,
}

/// What a valid submission asks the store to do.
#[derive(Debug, Clone)]
pub enum SaveAction {
    Create(CreateRecord),
    Update(RecordId, UpdateRecord),
}

impl FormSubmission {
    /// Trim the text fields and turn the submission into a store action.
    ///
    /// Title and universe must both be present, which only happens once a
    /// character has been loaded into the form.
    pub fn into_action(self) -> Result<SaveAction, CoreError> {
        let title = self.title.trim().to_string();
        if title.is_empty() || self.universe.is_empty() {
            return Err(CoreError::Validation(LOAD_REQUIRED_MESSAGE.to_string()));
        }

        let body = self.body.trim().to_string();
        let species = self.species.trim().to_string();
        let image_url = self.image_url.trim().to_string();
        let abilities = self.abilities.trim().to_string();

        Ok(match self.editing_id {
            Some(id) => SaveAction::Update(
                id,
                UpdateRecord {
                    title: Some(title),
                    body: Some(body),
                    universe: Some(self.universe),
                    species: Some(species),
                    image_url: Some(image_url),
                    abilities: Some(abilities),
                },
            ),
            None => SaveAction::Create(CreateRecord {
                title: Some(title),
                body: Some(body),
                universe: Some(self.universe),
                species: Some(species),
                image_url: Some(image_url),
                abilities: Some(abilities),
            }),
        })
    }
}
