use serde::{Deserialize, Serialize};
use std::fmt;

/// Club tables included in the full data export, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportTable {
    Alumnos,
    Profesores,
    Paquetes,
    Precios,
    ModosDePago,
    Gestores,
    Categorias,
    Pagos,
    Resumen,
    Inscripciones,
}

impl ExportTable {
    /// Export manifest. Filenames and the reported result follow this order.
    pub const ALL: [ExportTable; 10] = [
        ExportTable::Alumnos,
        ExportTable::Profesores,
        ExportTable::Paquetes,
        ExportTable::Precios,
        ExportTable::ModosDePago,
        ExportTable::Gestores,
        ExportTable::Categorias,
        ExportTable::Pagos,
        ExportTable::Resumen,
        ExportTable::Inscripciones,
    ];

    /// Table name on the hosted backend
    pub fn table_name(&self) -> &'static str {
        match self {
            ExportTable::Alumnos => "alumnos",
            ExportTable::Profesores => "profesores",
            ExportTable::Paquetes => "paquetes",
            ExportTable::Precios => "precios",
            ExportTable::ModosDePago => "modos_de_pago",
            ExportTable::Gestores => "gestores",
            ExportTable::Categorias => "categorias",
            ExportTable::Pagos => "pagos",
            ExportTable::Resumen => "resumen",
            ExportTable::Inscripciones => "inscripciones",
        }
    }

    /// Human readable label shown to the user
    pub fn display_name(&self) -> &'static str {
        match self {
            ExportTable::Alumnos => "Alumnos",
            ExportTable::Profesores => "Profesores",
            ExportTable::Paquetes => "Paquetes",
            ExportTable::Precios => "Precios",
            ExportTable::ModosDePago => "Modos de pago",
            ExportTable::Gestores => "Gestores",
            ExportTable::Categorias => "Categorías",
            ExportTable::Pagos => "Pagos",
            ExportTable::Resumen => "Resumen",
            ExportTable::Inscripciones => "Inscripciones",
        }
    }

    pub fn all() -> Vec<ExportTable> {
        Self::ALL.to_vec()
    }

    pub fn from_table_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.table_name() == name)
    }
}

impl fmt::Display for ExportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
