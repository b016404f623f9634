use crate::models::OrderRecord;

/// Write side of the system clipboard. Writes are fire-and-forget: a failed
/// write never surfaces to the lookup flows.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// Multi-line summary copied from the order detail view, formatted for
/// messaging (asterisks render as bold). The observation line is dropped
/// entirely when the record carries none.
#[must_use]
pub fn order_detail_summary(record: &OrderRecord) -> String {
    let mut lines = vec![
        "*DETALLE DE OC*".to_string(),
        "----------------".to_string(),
        format!("📄 *N° Doc:* {}", record.documento_compras),
        format!("🏢 *Prov:* {}", record.nombre_de_proveedor),
        format!("📅 *Fecha:* {}", record.fecha_documento),
        format!("📦 *Cant:* {}", record.cantidad_pedido),
        format!("📝 *Desc:* {}", record.texto_breve),
    ];
    if !record.observacion.is_empty() {
        lines.push(format!("ℹ️ *Obs:* {}", record.observacion));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(observacion: &str) -> OrderRecord {
        OrderRecord {
            documento_compras: "4500012345".to_string(),
            texto_breve: "Cable UTP".to_string(),
            nombre_de_proveedor: "Redes SA".to_string(),
            fecha_documento: "2024-03-01".to_string(),
            cantidad_pedido: "12".to_string(),
            observacion: observacion.to_string(),
        }
    }

    #[test]
    fn summary_interpolates_every_field() {
        let summary = order_detail_summary(&record("entrega parcial"));
        assert!(summary.starts_with("*DETALLE DE OC*\n----------------\n"));
        assert!(summary.contains("*N° Doc:* 4500012345"));
        assert!(summary.contains("*Prov:* Redes SA"));
        assert!(summary.contains("*Fecha:* 2024-03-01"));
        assert!(summary.contains("*Cant:* 12"));
        assert!(summary.contains("*Desc:* Cable UTP"));
        assert!(summary.ends_with("*Obs:* entrega parcial"));
    }

    #[test]
    fn empty_observation_drops_the_whole_line() {
        let summary = order_detail_summary(&record(""));
        assert!(!summary.contains("Obs"));
        assert!(summary.ends_with("*Desc:* Cable UTP"));
        assert_eq!(summary.lines().count(), 7);
    }
}
