/// Static disposal guidance attached to a predicted class label.
#[derive(Debug, PartialEq, Eq)]
pub struct WasteDetails {
    pub disposal: &'static str,
    pub carbon_emission: &'static str,
    pub recycling: &'static str,
    pub reuse: &'static str,
    pub decomposition: &'static str,
    pub tips: &'static str,
}

const PLASTIC: WasteDetails = WasteDetails {
    disposal: "♻️ Rinse clean and place in the recycling bin",
    carbon_emission: "2.9 kg CO₂ per kg",
    recycling: "Check codes 1-7; most bottles and containers are recyclable",
    reuse: "Refill bottles, turn containers into planters or storage",
    decomposition: "400-1000+ years",
    tips: "Choose glass or metal alternatives and carry reusable bags",
};

const ORGANIC: WasteDetails = WasteDetails {
    disposal: "🌱 Perfect for the composting bin",
    carbon_emission: "-0.1 kg CO₂ per kg (carbon negative when composted)",
    recycling: "Compost at home or use municipal organic collection",
    reuse: "Vegetable scraps make stock; coffee grounds feed plants",
    decomposition: "2-8 weeks in a compost pile",
    tips: "Keep meat, dairy and oils out of the compost",
};

const PAPER: WasteDetails = WasteDetails {
    disposal: "📄 Clean paper goes to recycling",
    carbon_emission: "1.3 kg CO₂ per kg",
    recycling: "Recyclable 5-7 times; remove staples, tape and plastic windows",
    reuse: "Gift wrapping, note paper, craft projects",
    decomposition: "2-6 weeks",
    tips: "Flatten cardboard boxes; wax-coated paper and tissues cannot be recycled",
};

const METAL: WasteDetails = WasteDetails {
    disposal: "🔩 Recyclable - rinse and check local cleaning requirements",
    carbon_emission: "1.7 kg CO₂ per kg",
    recycling: "Infinitely recyclable with no quality loss; saves 95% energy vs. new",
    reuse: "Cans work as organizers, scoops or planters",
    decomposition: "50-200 years",
    tips: "Separate aluminum from steel; remove labels where possible",
};

const GLASS: WasteDetails = WasteDetails {
    disposal: "🫙 Rinse and drop in the glass recycling bank",
    carbon_emission: "0.9 kg CO₂ per kg",
    recycling: "Infinitely recyclable; keep lids and corks separate",
    reuse: "Jars make excellent storage, vases and drinking glasses",
    decomposition: "1 million+ years",
    tips: "Never mix window glass or ceramics with container glass",
};

const FALLBACK: WasteDetails = WasteDetails {
    disposal: "🗑️ Check local disposal guidelines",
    carbon_emission: "varies by material",
    recycling: "Look for a recycling mark or ask your local facility",
    reuse: "Consider repair or donation before discarding",
    decomposition: "unknown",
    tips: "When in doubt, keep it out of the recycling bin to avoid contamination",
};

// Ordered association list over label substrings; the first row whose
// substring list matches the lower-cased label supplies the guidance.
const GUIDANCE: &[(&[&str], &WasteDetails)] = &[
    (&["plastic"], &PLASTIC),
    (&["organic", "food", "compost"], &ORGANIC),
    (&["paper", "cardboard"], &PAPER),
    (&["metal", "aluminum", "can"], &METAL),
    (&["glass", "jar"], &GLASS),
];

/// Maps a predicted class label to its guidance entry by case-insensitive
/// substring match, falling back to the generic entry.
pub fn details_for(label: &str) -> &'static WasteDetails {
    let label = label.to_lowercase();
    GUIDANCE
        .iter()
        .find(|(keys, _)| keys.iter().any(|key| label.contains(key)))
        .map(|(_, details)| *details)
        .unwrap_or(&FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_substring_selects_the_plastic_entry() {
        assert_eq!(details_for("plastic_bottle"), &PLASTIC);
        assert_eq!(details_for("PLASTIC-BAG"), &PLASTIC);
    }

    #[test]
    fn unknown_labels_fall_back_to_the_generic_entry() {
        assert_eq!(details_for("unknown_item"), &FALLBACK);
        assert_eq!(details_for(""), &FALLBACK);
    }

    #[test]
    fn each_material_family_maps_to_its_own_entry() {
        assert_eq!(details_for("food_scraps"), &ORGANIC);
        assert_eq!(details_for("cardboard_box"), &PAPER);
        assert_eq!(details_for("aluminum_can"), &METAL);
        assert_eq!(details_for("glass_jar"), &GLASS);
    }

    #[test]
    fn plastic_wins_over_later_rows_for_composite_labels() {
        // "plastic_food_wrap" contains both "plastic" and "food"
        assert_eq!(details_for("plastic_food_wrap"), &PLASTIC);
    }
}
