//! Story composer: pairs two stored characters in a canned narrative.
//!
//! Templates use `{first}` and `{second}` placeholders. Substitution is a
//! single left-to-right pass, so a title containing a placeholder token is
//! inserted verbatim and never re-expanded.

use rand::Rng;
use serde::Serialize;

use crate::error::CoreError;
use crate::record::CharacterRecord;
use crate::types::RecordId;

/// Default cosmetic delay before a story is returned.
pub const DEFAULT_STORY_DELAY_MS: u64 = 1500;

pub const MISSING_SELECTION_MESSAGE: &str =
    "Por favor, selecione dois personagens para criar uma história.";
pub const SAME_SELECTION_MESSAGE: &str =
    "Selecione personagens diferentes para criar uma história interessante!";

const FIRST: &str = "{first}";
const SECOND: &str = "{second}";

pub const STORY_TEMPLATES: [&str; 8] = [
    "Em uma jornada épica, {first} e {second} se uniram para enfrentar um desafio incrível. {first} trouxe suas habilidades únicas enquanto {second} contribuiu com sua coragem inabalável. Juntos, eles provaram que a amizade pode superar qualquer obstáculo!",
    "Quando dimensões colidiram, {first} foi transportado para o mundo de {second}. Inicialmente confusos, logo descobriram que suas diferenças os tornavam mais fortes. Uma amizade improvável nasceu, salvando ambos os universos da destruição.",
    "Num dia comum, {first} e {second} se encontraram por acaso. O que começou como um simples encontro transformou-se na maior aventura de suas vidas, provando que os melhores parceiros são aqueles que menos esperamos.",
    "Durante uma tempestade cósmica, os poderes de {first} e {second} se entrelaçaram criando uma conexão misteriosa. Agora, devem aprender a trabalhar juntos para controlar essa energia antes que ela consuma seus mundos.",
    "Um antigo mistério exigia a sabedoria de {first} e a ousadia de {second}. Enquanto desvendavam enigmas ancestrais, descobriram que suas histórias estavam conectadas por um destino escrito nas estrelas.",
    "Quando a paz foi ameaçada, {first} e {second} responderam ao chamado. Um com estratégia refinada, outro com instinto selvagem - juntos formaram a dupla perfeita para restaurar o equilíbrio universal.",
    "Num torneio interdimencional, {first} e {second} foram forçados a formar uma equipe. Rivais no início, logo perceberam que suas habilidades complementares poderiam levá-los à vitória e a uma amizade surpreendente.",
    "Uma profecia ancestral mencionava dois heróis de reinos distintos: {first} da terra do amanhecer e {second} do crepúsculo eterno. Unidos pelo destino, sua aliança se tornou a chave para desvendar segredos milenares.",
];

/// A composed story and the template it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub template_index: usize,
    pub text: String,
}

/// Check a pair of selected ids before any lookup happens.
pub fn validate_selection(
    first: Option<RecordId>,
    second: Option<RecordId>,
) -> Result<(RecordId, RecordId), CoreError> {
    match (first, second) {
        (Some(a), Some(b)) if a == b => {
            Err(CoreError::Selection(SAME_SELECTION_MESSAGE.to_string()))
        }
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(CoreError::Selection(MISSING_SELECTION_MESSAGE.to_string())),
    }
}

/// Compose a story for two distinct records using a uniformly random template.
pub fn generate<R: Rng>(
    rng: &mut R,
    first: Option<&CharacterRecord>,
    second: Option<&CharacterRecord>,
) -> Result<Story, CoreError> {
    let (first, second) = match (first, second) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(CoreError::Selection(MISSING_SELECTION_MESSAGE.to_string())),
    };
    validate_selection(Some(first.id), Some(second.id))?;

    let template_index = rng.random_range(0..STORY_TEMPLATES.len());
    Ok(Story {
        template_index,
        text: render_template(STORY_TEMPLATES[template_index], &first.title, &second.title),
    })
}

/// Substitute both titles into `template` in a single pass.
pub fn render_template(template: &str, first: &str, second: &str) -> String {
    let mut out = String::with_capacity(template.len() + first.len() * 2 + second.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(FIRST) {
            out.push_str(first);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(SECOND) {
            out.push_str(second);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
