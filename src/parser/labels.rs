use serde::{Deserialize, Serialize};

/// Labels that introduce the field lines under an activity.
///
/// The prompt asks the model to use exactly these labels, so the parser and the
/// prompt builder must share one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLabels {
    pub opening_hours: String,
    pub estimated_cost: String,
    pub price_check_link: String,
}

impl FieldLabels {
    /// Indonesian labels, the format the planner asks for by default.
    pub fn indonesian() -> Self {
        Self {
            opening_hours: "Jam Buka/Tutup".to_string(),
            estimated_cost: "Estimasi Biaya".to_string(),
            price_check_link: "Link Cek Harga".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            opening_hours: "Opening Hours".to_string(),
            estimated_cost: "Estimated Cost".to_string(),
            price_check_link: "Price Check Link".to_string(),
        }
    }
}

impl Default for FieldLabels {
    fn default() -> Self {
        Self::indonesian()
    }
}
