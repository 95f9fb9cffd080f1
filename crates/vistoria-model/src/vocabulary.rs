//! Closed vocabularies for categorical record fields.
//!
//! Both vocabularies are plain enums whose display labels are the exact
//! values stored downstream. Iteration order matters: when a raw value
//! fuzzily matches several entries, the first one in [`Vocabulary::ALL`]
//! order wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A closed set of permissible values for one record field.
pub trait Vocabulary: Copy + Eq + Sized + 'static {
    /// Vocabulary name used in messages.
    const NAME: &'static str;

    /// Every value in vocabulary order.
    const ALL: &'static [Self];

    /// The display label (the stored value).
    fn label(&self) -> &'static str;

    /// Labels in vocabulary order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::label).collect()
    }

    /// Exact label lookup.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.label() == label)
    }
}

/// Posture (inspection category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Postura {
    #[serde(rename = "ATIVIDADE")]
    Atividade,
    #[serde(rename = "OBRAS")]
    Obras,
    #[serde(rename = "MPL")]
    Mpl,
    #[serde(rename = "POP")]
    Pop,
    #[serde(rename = "Falta de AFLR")]
    FaltaDeAflr,
    #[serde(rename = "Acessibilidade")]
    Acessibilidade,
    #[serde(rename = "Limpeza")]
    Limpeza,
    #[serde(rename = "SABESP")]
    Sabesp,
    #[serde(rename = "Área Pública")]
    AreaPublica,
    #[serde(rename = "Invasão")]
    Invasao,
    #[serde(rename = "Ambulante")]
    Ambulante,
    #[serde(rename = "Equipamento")]
    Equipamento,
    #[serde(rename = "Recurso Multa")]
    RecursoMulta,
    #[serde(rename = "COMGÁS")]
    Comgas,
    #[serde(rename = "Publicidade")]
    Publicidade,
    #[serde(rename = "Comando Noturno")]
    ComandoNoturno,
    #[serde(rename = "Manejo Arbóreo")]
    ManejoArboreo,
}

impl Vocabulary for Postura {
    const NAME: &'static str = "postura";

    const ALL: &'static [Self] = &[
        Postura::Atividade,
        Postura::Obras,
        Postura::Mpl,
        Postura::Pop,
        Postura::FaltaDeAflr,
        Postura::Acessibilidade,
        Postura::Limpeza,
        Postura::Sabesp,
        Postura::AreaPublica,
        Postura::Invasao,
        Postura::Ambulante,
        Postura::Equipamento,
        Postura::RecursoMulta,
        Postura::Comgas,
        Postura::Publicidade,
        Postura::ComandoNoturno,
        Postura::ManejoArboreo,
    ];

    fn label(&self) -> &'static str {
        match self {
            Postura::Atividade => "ATIVIDADE",
            Postura::Obras => "OBRAS",
            Postura::Mpl => "MPL",
            Postura::Pop => "POP",
            Postura::FaltaDeAflr => "Falta de AFLR",
            Postura::Acessibilidade => "Acessibilidade",
            Postura::Limpeza => "Limpeza",
            Postura::Sabesp => "SABESP",
            Postura::AreaPublica => "Área Pública",
            Postura::Invasao => "Invasão",
            Postura::Ambulante => "Ambulante",
            Postura::Equipamento => "Equipamento",
            Postura::RecursoMulta => "Recurso Multa",
            Postura::Comgas => "COMGÁS",
            Postura::Publicidade => "Publicidade",
            Postura::ComandoNoturno => "Comando Noturno",
            Postura::ManejoArboreo => "Manejo Arbóreo",
        }
    }
}

/// Processing status of a demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Ação necessária")]
    AcaoNecessaria,
    #[serde(rename = "Demanda concluída")]
    DemandaConcluida,
    #[serde(rename = "Demanda devolvida")]
    DemandaDevolvida,
    #[serde(rename = "Demanda agrupada")]
    DemandaAgrupada,
    #[serde(rename = "Auto emitido")]
    AutoEmitido,
    #[serde(rename = "A.R. devolvido")]
    ArDevolvido,
    #[serde(rename = "A.R. entregue")]
    ArEntregue,
}

impl Vocabulary for Status {
    const NAME: &'static str = "status";

    const ALL: &'static [Self] = &[
        Status::AcaoNecessaria,
        Status::DemandaConcluida,
        Status::DemandaDevolvida,
        Status::DemandaAgrupada,
        Status::AutoEmitido,
        Status::ArDevolvido,
        Status::ArEntregue,
    ];

    fn label(&self) -> &'static str {
        match self {
            Status::AcaoNecessaria => "Ação necessária",
            Status::DemandaConcluida => "Demanda concluída",
            Status::DemandaDevolvida => "Demanda devolvida",
            Status::DemandaAgrupada => "Demanda agrupada",
            Status::AutoEmitido => "Auto emitido",
            Status::ArDevolvido => "A.R. devolvido",
            Status::ArEntregue => "A.R. entregue",
        }
    }
}

macro_rules! vocabulary_traits {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            /// Exact label lookup; fuzzy resolution lives in the mapping crate.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::from_label(s.trim()).ok_or_else(|| ModelError::UnknownValue {
                    vocabulary: <$ty as Vocabulary>::NAME,
                    value: s.to_string(),
                })
            }
        }
    };
}

vocabulary_traits!(Postura);
vocabulary_traits!(Status);
