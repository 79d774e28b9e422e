//! Motif class labels in model output order.

/// Number of motif classes the model predicts.
pub const MOTIF_CLASS_COUNT: usize = 20;

// Order matches the trained model's output head. Do not reorder.
const MOTIF_LABELS: [&str; MOTIF_CLASS_COUNT] = [
    "Candramawat",
    "Elang Jawa Situ Gunung",
    "Garuda Ngupuk",
    "Jantung Kole",
    "Leungli",
    "Makara",
    "Mandala Bagja",
    "Manuk Julang",
    "Masagi",
    "Mata Air Sukabumi",
    "Merak Kinanti",
    "Mozaik Kadudampit",
    "Nakamesta",
    "Pakwan",
    "Palawan",
    "Penyu Sukabumian",
    "Puyuh",
    "Rereng Gunung Parang",
    "Rereng Tjaiwangi",
    "Wijayakusumah",
];

/// Returns the motif class labels, indexed by model class ID.
pub fn motif_labels() -> &'static [&'static str; MOTIF_CLASS_COUNT] {
    &MOTIF_LABELS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_label_count() {
        assert_eq!(motif_labels().len(), MOTIF_CLASS_COUNT);
    }

    #[test]
    fn test_labels_unique() {
        let unique: HashSet<_> = motif_labels().iter().collect();
        assert_eq!(unique.len(), MOTIF_CLASS_COUNT);
    }

    #[test]
    fn test_known_positions() {
        assert_eq!(motif_labels()[0], "Candramawat");
        assert_eq!(motif_labels()[19], "Wijayakusumah");
    }
}
