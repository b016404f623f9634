use serde::{Deserialize, Serialize};

/// Upper bound on the suggestion dropdown shared by both lookup flows.
pub const SUGGESTION_LIMIT: usize = 7;

/// Display cap for the order results table. Filtering itself is unbounded;
/// only rendering honors this limit.
pub const RESULT_ROW_LIMIT: usize = 50;

/// One row of the MK/SAP crosswalk sheet. Field names follow the published
/// CSV headers; absent cells deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRecord {
    #[serde(rename = "codigoMK", default)]
    pub codigo_mk: String,
    #[serde(rename = "descMK", default)]
    pub desc_mk: String,
    #[serde(rename = "codigoSAP", default)]
    pub codigo_sap: String,
    #[serde(rename = "descSAP", default)]
    pub desc_sap: String,
}

impl CodeRecord {
    pub(crate) fn searchable_fields(&self) -> [&str; 4] {
        [
            &self.codigo_mk,
            &self.desc_mk,
            &self.codigo_sap,
            &self.desc_sap,
        ]
    }
}

/// One purchase-order line item from the OC sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "Documento_compras", default)]
    pub documento_compras: String,
    #[serde(rename = "Texto_breve", default)]
    pub texto_breve: String,
    #[serde(rename = "Nombre_de_proveedor", default)]
    pub nombre_de_proveedor: String,
    #[serde(rename = "Fecha_documento", default)]
    pub fecha_documento: String,
    #[serde(rename = "Cantidad_pedido", default)]
    pub cantidad_pedido: String,
    #[serde(rename = "Observacion", default)]
    pub observacion: String,
}

/// One line of the append-only activity log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadLogEntry {
    pub request_id: String,
    pub operation: String,
    pub status: String,
    pub latency_ms: u128,
    pub created_at: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
