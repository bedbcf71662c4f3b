use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::domain::Category;

/// Canned reply selected for one user message.
#[derive(Debug, Clone, Copy)]
pub struct BotReply {
    pub text: &'static str,
    pub category: Category,
}

struct KeywordGroup {
    keywords: &'static [&'static str],
    reply: &'static str,
    category: Category,
}

// Tested in declaration order; the first group with any keyword contained in
// the lower-cased input wins. Kept as a slice, not a map, because the
// tie-break depends on this ordering.
const KEYWORD_GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        keywords: &["plastic"],
        reply: "🌊 Plastic takes 400-1000+ years to decompose! Here are key tips:\n\n♻️ Always rinse containers before recycling\n🔄 Look for recycling codes 1-7 on plastic items\n💡 Reduce usage: Choose glass or metal alternatives\n🛍️ Use reusable bags instead of plastic ones\n\nDid you know? Recycling 1 plastic bottle saves enough energy to power a 60W bulb for 3 hours!",
        category: Category::Tip,
    },
    KeywordGroup {
        keywords: &["organic", "compost", "food waste"],
        reply: "🌱 Organic waste is actually carbon negative when composted properly!\n\n✅ Compostable: Fruit peels, vegetable scraps, coffee grounds, eggshells\n❌ Avoid: Meat, dairy, oils, pet waste\n🏠 Start home composting: 30% of household waste can be composted\n⚡ Benefits: Reduces methane emissions, creates nutrient-rich soil\n\nTip: A small countertop composter can handle 2-4 lbs of organic waste daily!",
        category: Category::Guide,
    },
    KeywordGroup {
        keywords: &["paper", "cardboard"],
        reply: "📄 Paper can be recycled 5-7 times before fibers become too short!\n\n♻️ Clean paper only: Remove staples, tape, plastic windows\n📦 Cardboard: Flatten boxes, remove all tape and labels\n🚫 Cannot recycle: Wax-coated paper, tissues, paper towels\n💡 Reuse ideas: Gift wrapping, note paper, craft projects\n\nFun fact: Recycling 1 ton of paper saves 17 trees and 7,000 gallons of water!",
        category: Category::Fact,
    },
    KeywordGroup {
        keywords: &["metal", "aluminum", "can"],
        reply: "🔩 Metals are the recycling champions - they can be recycled infinitely!\n\n⚡ Aluminum cans: Save 95% energy when recycled vs. new production\n🥫 Steel cans: Remove labels, rinse clean\n💡 Separate metals: Aluminum, steel, copper have different values\n🔄 Indefinite recycling: No quality loss over time\n\nAmazing fact: A recycled aluminum can returns to store shelves in just 60 days!",
        category: Category::Fact,
    },
    KeywordGroup {
        keywords: &["carbon", "emission", "footprint"],
        reply: "🌍 Your waste choices directly impact carbon emissions:\n\n📉 Plastic: 2.9 kg CO₂ per kg\n📉 Paper: 1.3 kg CO₂ per kg\n📉 Metal: 1.7 kg CO₂ per kg\n📈 Organic: -0.1 kg CO₂ per kg (carbon negative!)\n\n🎯 Reduce impact: Compost organic waste, recycle properly, choose reusable items\n\nGoal: Achieve 50% waste reduction = 2 tons less CO₂ annually per household!",
        category: Category::Fact,
    },
    KeywordGroup {
        keywords: &["recycle", "recycling"],
        reply: "♻️ Master recycling with these pro tips:\n\n🧼 Clean containers: Rinse food residue\n📱 Check local rules: Recycling varies by location\n🔢 Know the codes: Plastic numbers 1-7 indicate recyclability\n📦 Separate materials: Don't mix different types\n🚫 When in doubt, throw it out: Contamination ruins batches\n\nDownload your local recycling app for specific guidelines!",
        category: Category::Tip,
    },
    KeywordGroup {
        keywords: &["sustainable", "eco", "green"],
        reply: "🌿 Transform your lifestyle with these sustainable swaps:\n\n🛍️ Reusable bags instead of plastic\n☕ Bring your own cup to coffee shops\n🥤 Stainless steel water bottle vs. plastic\n🍽️ Glass food containers vs. disposable\n🧽 Bamboo utensils for on-the-go\n📱 Digital receipts vs. paper\n\nSmall changes = Big impact! Start with one swap this week!",
        category: Category::Tip,
    },
];

const FALLBACKS: &[(&str, Category)] = &[
    (
        "🤔 Great question! Here are some key waste management principles:\n\n1️⃣ Reduce: Buy less, choose durable items\n2️⃣ Reuse: Repurpose before discarding\n3️⃣ Recycle: Follow local guidelines\n4️⃣ Rot: Compost organic materials\n\nWhat specific type of waste would you like to learn about?",
        Category::Guide,
    ),
    (
        "🌱 Did you know the average person generates 4.5 pounds of waste daily?\n\nHere's how to reduce it:\n📦 Choose products with minimal packaging\n🔄 Repair instead of replacing\n🎁 Buy experiences, not things\n📱 Go digital when possible\n\nEvery small action counts toward a cleaner planet!",
        Category::Fact,
    ),
    (
        "♻️ I'm here to help with all things eco-friendly! Ask me about:\n\n🗂️ Specific waste types (plastic, paper, metal, organic)\n🌍 Carbon footprint reduction\n🏠 Home composting setup\n♻️ Recycling guidelines\n🌱 Sustainable living tips\n\nWhat interests you most?",
        Category::Question,
    ),
];

/// Substring-match dispatcher behind the chat flow. Always produces a reply;
/// unmatched input draws one of the three fallbacks from the owned RNG.
pub struct KeywordResponder {
    rng: StdRng,
}

impl KeywordResponder {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic fallback selection for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn respond(&mut self, user_text: &str) -> BotReply {
        let message = user_text.to_lowercase();

        for group in KEYWORD_GROUPS {
            if group.keywords.iter().any(|kw| message.contains(kw)) {
                return BotReply {
                    text: group.reply,
                    category: group.category,
                };
            }
        }

        let (text, category) = FALLBACKS[self.rng.gen_range(0..FALLBACKS.len())];
        BotReply { text, category }
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn plastic_queries_return_the_plastic_tip() {
        let mut responder = KeywordResponder::with_seed(0);
        for input in ["How do I recycle plastic?", "PLASTIC bottles", "microplastics"] {
            let reply = responder.respond(input);
            assert_eq!(reply.category, Category::Tip);
            assert!(reply.text.starts_with("🌊 Plastic"));
        }
    }

    #[test]
    fn first_matching_group_wins() {
        let mut responder = KeywordResponder::with_seed(0);
        let reply = responder.respond("can I compost plastic?");
        // plastic is tested before organic/compost in the fixed order
        assert!(reply.text.starts_with("🌊 Plastic"));
        assert_eq!(reply.category, Category::Tip);
    }

    #[test]
    fn organic_keywords_return_the_composting_guide() {
        let mut responder = KeywordResponder::with_seed(0);
        let reply = responder.respond("how to deal with food waste at home");
        assert_eq!(reply.category, Category::Guide);
        assert!(reply.text.contains("Compostable"));
    }

    #[test]
    fn unmatched_input_draws_from_exactly_three_fallbacks() {
        let mut responder = KeywordResponder::with_seed(42);
        let fallback_texts: HashSet<&str> = FALLBACKS.iter().map(|(text, _)| *text).collect();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let reply = responder.respond("hello there");
            assert!(fallback_texts.contains(reply.text));
            seen.insert(reply.text);
        }
        // 200 draws over 3 choices covers every fallback
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn fallback_selection_is_deterministic_under_a_seed() {
        let mut a = KeywordResponder::with_seed(7);
        let mut b = KeywordResponder::with_seed(7);
        for _ in 0..20 {
            assert_eq!(a.respond("xyzzy").text, b.respond("xyzzy").text);
        }
    }
}
