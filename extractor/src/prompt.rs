/// Instruction block sent ahead of every document. The keys are fixed; the
/// model fills in translated values or null for anything the listing does
/// not mention.
pub const EXTRACTION_PROMPT: &str = r#"You are a real estate data extraction expert. I will provide you with the text content of a Japanese real estate PDF document. Your task is to extract specific real estate information and format it as a single JSON object.

The output JSON MUST have the following keys in English. The extracted values should also be translated into English. If a value is not present in the document or a direct translation is not possible (e.g., a specific address), use null.

- **Property Type:** Look for '戸建て', 'マンション', '土地', '1棟マンション', 'アパート'. Translate the found value to English (e.g., '戸建て' -> 'Detached House').
- **Price:** Look for '価格', '値段', '販売価格'.
- **Address:** Look for '所在', '所在地', '住所'.
- **Area:** Look for '面積', '土地面積', '延床面積', '延床', '敷地面積', '建物面積'.
- **Ownership:** Look for '所有権', '借地権', '敷地権'. Translate to English (e.g., '所有権' -> 'Freehold').
- **Shared Ownership:** Look for '持ち分', '共有持分'.
- **Land Category:** Look for '地目', '宅地', '山林'. Translate to English.
- **Road Info:** Look for '道路', '幅員', '長さ', '接道'.
- **Coverage & Floor-to-Area Ratio:** Look for '建ぺい率', '容積率'.
- **Zoning:** Look for '用途地域'. Translate to English.
- **Utilities:** Look for '水道', '下水', 'ガス', '都市ガス', '電気'. Translate to English.
- **Status:** Look for '現況', '居住中', '空き家', '空室'. Translate to English (e.g., '居住中' -> 'Occupied').
- **Transportation:** Look for '駅', '徒歩', '分', '沿線', '交通'.
- **Construction Date:** Look for '築年月', '建築年月', '増改築'.
- **Floor Plan & Structure:** Look for '間取り', '構造', '鉄筋コンクリート', '鉄筋鉄骨コンクリート', '鉄骨', '重量鉄骨', '軽量鉄骨', '木造'. Translate to English (e.g., '木造' -> 'Wooden').
- **Parking:** Look for '車庫', '駐車場'. Translate to English.

The output MUST be a valid JSON object. Do not include any text before or after the JSON."#;

pub fn build_extraction_prompt(document_text: &str) -> String {
    format!("{}\n\nDocument Text:\n{}", EXTRACTION_PROMPT, document_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_KEYS: [&str; 16] = [
        "Property Type",
        "Price",
        "Address",
        "Area",
        "Ownership",
        "Shared Ownership",
        "Land Category",
        "Road Info",
        "Coverage & Floor-to-Area Ratio",
        "Zoning",
        "Utilities",
        "Status",
        "Transportation",
        "Construction Date",
        "Floor Plan & Structure",
        "Parking",
    ];

    #[test]
    fn instruction_block_names_every_output_key() {
        for key in EXPECTED_KEYS {
            assert!(
                EXTRACTION_PROMPT.contains(key),
                "prompt is missing the '{}' key",
                key
            );
        }
    }

    #[test]
    fn instruction_block_forbids_text_around_the_json() {
        assert!(EXTRACTION_PROMPT.contains("Do not include any text before or after the JSON."));
    }

    #[test]
    fn document_text_is_appended_after_the_separator() {
        let document = "価格: 3000万円\n所在地: 東京都渋谷区";
        let prompt = build_extraction_prompt(document);

        assert!(prompt.starts_with(EXTRACTION_PROMPT));
        assert!(prompt.contains("\n\nDocument Text:\n"));
        assert!(prompt.ends_with(document));
    }
}
