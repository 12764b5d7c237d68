//! Prompt templates for gap analysis and outline generation
//!
//! Every function here is pure: identical inputs give byte-identical
//! prompts.

/// Templates for generating the system framing and user prompt of each task
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the gap analysis call
    pub fn gap_system() -> &'static str {
        "You are a senior SEO strategist. STRICTLY grounded in the provided context. Do not invent facts."
    }

    /// System prompt for the outline call
    pub fn outline_system() -> &'static str {
        "You are a senior SEO strategist. Create an outline based ONLY on the provided competitor data. Do not hallucinate sections not relevant to the topic."
    }

    /// Labeled competitor block
    ///
    /// Labels are dense over the texts given: the first text is always
    /// `COMPETITOR 1`, whatever slot it came from.
    pub fn competitor_block(competitor_texts: &[&str]) -> String {
        let mut block = String::new();
        for (i, content) in competitor_texts.iter().enumerate() {
            block.push_str(&format!(
                "\n--- COMPETITOR {} CONTENT ---\n{}\n",
                i + 1,
                content
            ));
        }
        block
    }

    /// User prompt for the gap analysis
    pub fn gap_prompt(keyword: &str, own_text: &str, competitor_texts: &[&str]) -> String {
        format!(
            r#"You are a senior SEO content strategist performing a competitor-based content gap analysis. You must rely only on the content provided to you and not on external knowledge, assumptions, or rankings. The purpose of this analysis is to identify what is missing, underdeveloped, or misaligned in the target page compared to competitor pages that already perform well for the same topic.

The primary keyword provided is used only to understand topic intent and context. It must not be treated as a keyword-matching requirement. Do not evaluate keyword density or exact-match usage. Focus instead on topical coverage, intent satisfaction, entities, and structural completeness.

You are given two datasets. The first dataset represents combined content from top competitor pages. These pages define the semantic scope, intent coverage, and depth expectations for this topic. The second dataset represents the content of the target landing page.

Your task is to analyze differences between these two datasets and identify meaningful gaps. A gap exists when competitors consistently cover a subtopic, concept, intent, entity, or section that is missing or significantly weaker in the target page. Do not invent gaps that are not supported by competitor evidence.

You must group gaps by intent type where applicable, such as informational, commercial, or transactional intent, but only when the distinction is clear from competitor content. You must also identify structural gaps, such as missing sections, poor content sequencing, or insufficient depth compared to competitors.

Your output must be practical and decision-oriented. Clearly explain what is missing, why it matters in the context of competitor coverage, and how it affects the completeness of the target page. When appropriate, suggest specific section ideas or headings that could address the gap, but do not write full content.

Do not claim ranking outcomes, traffic impact, or guarantees. This analysis is strictly a semantic and structural comparison based on the provided content.

### PRIMARY KEYWORD
{keyword}

### DATASET 1: COMPETITOR CONTENT (Combined)
{competitors}

### DATASET 2: TARGET LANDING PAGE CONTENT
{own_text}
"#,
            keyword = keyword,
            competitors = Self::competitor_block(competitor_texts),
            own_text = own_text,
        )
    }

    /// User prompt for the outline
    pub fn outline_prompt(keyword: &str, competitor_texts: &[&str]) -> String {
        format!(
            r#"You are an expert SEO Content Architect.

### GOAL
Create the **Ultimate Content Outline** for the keyword: "{keyword}".
Your goal is to design a structure that is superior to all competitors by combining their best sections and filling the identified gaps.

### COMPETITOR DATA
{competitors}

### INSTRUCTIONS
1.  **Analyze Structure**: Look at the H2/H3 structures of the competitors.
2.  **Synthesize**: Create a "Master Outline" that covers the topic comprehensively.
3.  **Format**:
    -   **H1**: Optimized Title
    -   **H2**: Main Sections (Order them logically for the user journey)
    -   **H3**: Sub-topics (What specific points to cover)
    -   **Notes**: Briefly explain *why* this section is included (e.g., "Competitor 1 & 2 cover this, crucial for intent").

Output in Markdown.
"#,
            keyword = keyword,
            competitors = Self::competitor_block(competitor_texts),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competitor_block_labels_are_dense() {
        let block = PromptTemplate::competitor_block(&["alpha", "beta", "gamma"]);
        assert_eq!(
            block,
            "\n--- COMPETITOR 1 CONTENT ---\nalpha\n\
             \n--- COMPETITOR 2 CONTENT ---\nbeta\n\
             \n--- COMPETITOR 3 CONTENT ---\ngamma\n"
        );
    }

    #[test]
    fn test_competitor_block_empty() {
        assert_eq!(PromptTemplate::competitor_block(&[]), "");
    }

    #[test]
    fn test_gap_prompt_contains_sections_in_order() {
        let prompt = PromptTemplate::gap_prompt(
            "best running shoes 2024",
            "our page text",
            &["competitor text"],
        );
        let keyword_at = prompt.find("### PRIMARY KEYWORD\nbest running shoes 2024").unwrap();
        let comp_at = prompt
            .find("### DATASET 1: COMPETITOR CONTENT (Combined)")
            .unwrap();
        let label_at = prompt.find("--- COMPETITOR 1 CONTENT ---\ncompetitor text").unwrap();
        let own_at = prompt
            .find("### DATASET 2: TARGET LANDING PAGE CONTENT\nour page text")
            .unwrap();
        assert!(keyword_at < comp_at && comp_at < label_at && label_at < own_at);
        assert!(prompt.contains("must not be treated as a keyword-matching requirement"));
        assert!(prompt.contains("Do not invent gaps that are not supported by competitor evidence"));
        assert!(prompt.contains("Do not claim ranking outcomes"));
    }

    #[test]
    fn test_gap_prompt_with_no_competitors_is_well_formed() {
        let prompt = PromptTemplate::gap_prompt("kw", "own", &[]);
        assert!(prompt.contains("### DATASET 1: COMPETITOR CONTENT (Combined)\n\n\n### DATASET 2"));
        assert!(!prompt.contains("COMPETITOR 1"));
    }

    #[test]
    fn test_outline_prompt_heading_contract() {
        let prompt = PromptTemplate::outline_prompt("trail shoes", &["a", "b"]);
        assert!(prompt.contains("for the keyword: \"trail shoes\""));
        assert!(prompt.contains("**H1**: Optimized Title"));
        assert!(prompt.contains("**H2**: Main Sections"));
        assert!(prompt.contains("**H3**: Sub-topics"));
        assert!(prompt.contains("**Notes**"));
        assert!(prompt.contains("--- COMPETITOR 2 CONTENT ---\nb"));
        assert!(prompt.trim_end().ends_with("Output in Markdown."));
    }

    #[test]
    fn test_outline_prompt_with_no_competitors_is_well_formed() {
        let prompt = PromptTemplate::outline_prompt("kw", &[]);
        assert!(prompt.contains("### COMPETITOR DATA\n\n\n### INSTRUCTIONS"));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let texts = ["one", "two"];
        assert_eq!(
            PromptTemplate::gap_prompt("kw", "own", &texts),
            PromptTemplate::gap_prompt("kw", "own", &texts)
        );
        assert_eq!(
            PromptTemplate::outline_prompt("kw", &texts),
            PromptTemplate::outline_prompt("kw", &texts)
        );
    }

    #[test]
    fn test_system_framing() {
        assert!(PromptTemplate::gap_system().contains("STRICTLY grounded"));
        assert!(PromptTemplate::outline_system().contains("ONLY on the provided competitor data"));
    }
}
