//! Known selectable values for the character form.
//!
//! Each universe contributes a fixed option set; the form vocabulary is the
//! primary set followed by the secondary set, field by field.

use serde::Serialize;

use crate::universe::Universe;

// ---------------------------------------------------------------------------
// Universe option sets
// ---------------------------------------------------------------------------

/// Fixed option lists contributed by one universe.
#[derive(Debug, Clone, Copy)]
pub struct UniverseOptions {
    pub titles: &'static [&'static str],
    pub bodies: &'static [&'static str],
    pub abilities: &'static [&'static str],
    pub species: &'static [&'static str],
}

pub const POKEMON_OPTIONS: UniverseOptions = UniverseOptions {
    titles: &[
        "Pikachu",
        "Bulbasaur",
        "Charmander",
        "Squirtle",
        "Jigglypuff",
        "Meowth",
        "Psyduck",
        "Gengar",
        "Eevee",
        "Snorlax",
    ],
    bodies: &[
        "Pokémon elétrico amarelo e fofo",
        "Pokémon do tipo planta e veneno",
        "Pokémon do tipo fogo com chama na cauda",
        "Pokémon do tipo água com casco",
        "Pokémon do tipo normal e fada com voz hipnótica",
        "Pokémon gato ganancioso que adora moedas",
        "Pokémon pato com dores de cabeça e poderes psíquicos",
        "Pokémon fantasma sombrio e misterioso",
        "Pokémon com capacidade de evoluir para várias formas",
        "Pokémon gigante e preguiçoso que adora dormir",
    ],
    abilities: &[
        "Static, Lightning Rod",
        "Overgrow, Chlorophyll",
        "Blaze, Solar Power",
        "Torrent, Rain Dish",
        "Cute Charm, Competitive",
        "Pickup, Technician",
        "Damp, Cloud Nine",
        "Cursed Body, Levitate",
        "Adaptability, Run Away",
        "Immunity, Thick Fat",
    ],
    species: &["Pokémon"],
};

pub const ADVENTURE_TIME_OPTIONS: UniverseOptions = UniverseOptions {
    titles: &[
        "Finn",
        "Jake",
        "Princess Bubblegum",
        "Marceline",
        "Ice King",
        "BMO",
        "Lumpy Space Princess",
        "Flame Princess",
        "Lemongrab",
        "Tree Trunks",
    ],
    bodies: &[
        "Herói aventureiro humano corajoso",
        "Cachorro mágico que estica e é o melhor amigo de Finn",
        "Princesa científica do Reino Doce feita de chiclete",
        "Rainha dos vampiros milenar e musicista",
        "Rei do gelo com coroa mágica e poderes congelantes",
        "Console de videogame vivo e inteligente",
        "Princesa do Lumpy Space com atitude dramática",
        "Princesa do Reino do Fogo com poderes flamejantes",
        "Conde temperamental obcecado por ordem e limão",
        "Elefante idosa que adora fazer tortas de maçã",
    ],
    abilities: &[
        "Espada, Coragem, Liderança",
        "Esticar, Magia, Transformar",
        "Ciência, Liderança, Criação",
        "Voo, Música, Imortalidade",
        "Magia de Gelo, Voo, Criatura de Neve",
        "Jogos, Computação, Armazenamento",
        "Drama, Flutuação, Transformação",
        "Pirocinese, Liderança, Força",
        "Gritos, Ordem, Criar Subordinados",
        "Culinária, Sabedoria, Persistência",
    ],
    species: &[
        "Humano",
        "Cachorro Mágico",
        "Chiclete",
        "Vampira",
        "Humano Mágico",
        "Console Vivo",
        "Ser Espacial",
        "Ser de Fogo",
        "Híbrido de Limão",
        "Elefante",
    ],
};

impl Universe {
    /// The fixed form options this universe contributes.
    pub fn options(self) -> &'static UniverseOptions {
        match self {
            Universe::Pokemon => &POKEMON_OPTIONS,
            Universe::AdventureTime => &ADVENTURE_TIME_OPTIONS,
        }
    }
}

// ---------------------------------------------------------------------------
// Combined vocabulary
// ---------------------------------------------------------------------------

/// Four parallel option lists covering every universe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormVocabulary {
    pub titles: Vec<String>,
    pub bodies: Vec<String>,
    pub abilities: Vec<String>,
    pub species: Vec<String>,
}

impl FormVocabulary {
    /// Concatenate the option sets of `universes`, in order.
    pub fn from_universes(universes: &[Universe]) -> Self {
        let mut vocabulary = Self::default();
        for universe in universes {
            let options = universe.options();
            extend(&mut vocabulary.titles, options.titles);
            extend(&mut vocabulary.bodies, options.bodies);
            extend(&mut vocabulary.abilities, options.abilities);
            extend(&mut vocabulary.species, options.species);
        }
        vocabulary
    }

    /// Vocabulary across both universes, primary first.
    pub fn combined() -> Self {
        Self::from_universes(&Universe::ALL)
    }
}

fn extend(target: &mut Vec<String>, values: &[&str]) {
    target.extend(values.iter().map(|v| v.to_string()));
}
