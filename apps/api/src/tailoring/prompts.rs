// All LLM prompt constants for the Tailoring module.
// Reuses cross-cutting fragments from llm_client::prompts.
//
// These blocks are content, not behavior: the service performs no
// classification or writing itself — the category detection and tailoring
// strategy are delegated entirely to the model via these instructions.

/// Fixed candidate background facts, embedded verbatim in every prompt.
pub const CANDIDATE_BACKGROUND: &str = r#"CANDIDATE BACKGROUND:
- Current Role: AI/ML Engineer (Contract) at Jefferies Group, Remote USA (Mar 2024-Present, concurrent with Master's)
- Previous Role: Associate AI/ML Engineer at Experian, Hyderabad India (Jan 2021-Dec 2022)
- Education: MS Computer Science, Lamar University (2023-2024); BTech CS (2016-2020)
- Programming: Python (expert), C++ (proficient), SQL, JavaScript
- Core Expertise: PyTorch, TensorFlow, production LLM applications, RAG systems, multi-agent workflows, automated testing
- Management Experience: Worked with 10 direct reports at Jefferies, collaborated with cross-functional teams, mentored junior engineers
- Key Achievements: 30% review time reduction, 62% latency improvement (850ms to 320ms using PyTorch optimization), 18% false positive reduction, 45% API cost reduction, 98%+ uptime, 15M+ records processed, 25% efficiency gain"#;

/// Fixed project inventory, embedded verbatim in every prompt.
pub const CORE_PROJECTS: &str = r#"CORE PROJECTS:
1. LLM Code Analyzer: Multi-agent code review (GPT-4o, Claude, DeepSeek), LangSmith observability, automated testing, Streamlit on Hugging Face
2. AI Learning Path Generator: RAG with ChromaDB/LlamaIndex, statistical optimization, CI/CD on Render
3. Multimodal Medical Assistant: PyTorch vision-language models for X-ray analysis, Whisper audio, Flask+Docker, quality workflows
4. Job Search Assistant: FastAPI+Next.js multi-agent platform with automated testing, Vercel+Render deployment"#;

/// Category self-classification block. The closed set of five specialist
/// categories, each with keyword signals and a positioning strategy. The
/// model classifies the posting before generating content; the service never
/// classifies locally.
pub const CATEGORY_DETECTION: &str = r#"CATEGORY DETECTION (do this FIRST, before writing any content):
Classify this job into exactly ONE of these five specialist categories using the keyword signals below.

1. "GenAI_LLM_Specialist"
   Signals: LLM, RAG, prompt engineering, agents, agentic, LangChain, LlamaIndex, vector database, embeddings, fine-tuning, GPT, Claude, Gemini
   Positioning: lead with production LLM applications, RAG retrieval, multi-agent workflows, and the 45% API cost reduction.

2. "ML_Platform_Engineer"
   Signals: MLOps, CI/CD, Kubernetes, Docker, model serving, deployment pipelines, AWS, Azure, infrastructure, scalability, monitoring
   Positioning: lead with deployment pipelines, 98%+ uptime, vLLM inference serving, and the 62% latency reduction.

3. "Applied_ML_Scientist"
   Signals: model training, PyTorch, TensorFlow, deep learning, statistical modeling, experimentation, research, publications, algorithms
   Positioning: lead with model development depth, 15M+ record datasets, fraud detection with 18% false positive reduction, and the Master's degree.

4. "Multimodal_Vision_Engineer"
   Signals: computer vision, image, video, vision-language, OCR, audio, speech, Whisper, multimodal, medical imaging
   Positioning: lead with the Multimodal Medical Assistant, PyTorch vision-language models, and Whisper audio integration.

5. "AI_Quality_Engineer"
   Signals: testing, QA, evaluation, benchmarks, quality metrics, observability, LangSmith, validation, A/B testing, reliability
   Positioning: lead with automated evaluation workflows, LangSmith observability, automated testing, and the 30% review time reduction.

If signals are mixed, pick the category with the most distinct signal hits and report lower confidence. Apply the winning category's positioning strategy to the summary, skill ordering, and bullet emphasis."#;

/// The exact expected output shape, with field-by-field instructions.
pub const OUTPUT_SKELETON: &str = r#"Generate tailored resume JSON focusing on THIS SPECIFIC JOB:
{
    "summary": "3-4 sentences emphasizing MOST RELEVANT experience to THIS job. Focus on what THIS role needs most.",
    "technical_skills": [
        "Programming & Development: Python, C++, SQL, JavaScript, REST APIs, Git/GitHub, FastAPI, Flask, Streamlit, AsyncIO",
        "AI/ML Frameworks & Tools: PyTorch, TensorFlow, Scikit-learn, Hugging Face Transformers, LangChain, LlamaIndex, XGBoost",
        "LLMs & Generative AI: OpenAI GPT-4o/GPT-5, Anthropic Claude Sonnet 4.5, Google Gemini 2.5 Pro, AI Model Fine-tuning, Prompt Engineering, Groq, Whisper",
        "MLOps & Deployment: Docker, CI/CD Pipelines, GitHub Actions, AWS (S3, Lambda, SageMaker), Azure (ML, Data Factory), vLLM, Render, Vercel, Automated Testing",
        "Data & Vector Databases: RAG Systems, Pinecone, ChromaDB, FAISS, Large-scale Datasets, Semantic Search, Pandas, NumPy, SQL Databases",
        "Development Tools & IDEs: Cursor AI, Windsurf AI, VS Code, Jupyter, Linux/Unix",
        "Monitoring & Evaluation: LangSmith, Weights & Biases, MLflow, Statistical Analysis, Model Performance Tracking, A/B Testing, Quality Metrics"
    ],
    "experience_bullets_jefferies": [
        "5 bullets reframing the Jefferies achievements toward what THIS job needs most"
    ],
    "experience_bullets_experian": [
        "4-5 bullets reframing the Experian achievements toward what THIS job needs most"
    ],
    "project_descriptions": [
        "4 descriptions, 1-2 sentences each, highlighting technologies mentioned in THIS job description"
    ],
    "keywords": ["15-20 critical keywords from job description"],
    "role_focus": "1 sentence describing what THIS specific role prioritizes most",
    "detected_category": {
        "primary": "exactly one of the five category labels above",
        "confidence": "high | medium | low",
        "signals": ["the job-description keywords that drove the classification"]
    },
    "core_focus_areas": "3-4 pipe-delimited focus keywords for the detected category, e.g. 'RAG Systems | LLM Applications | Production Deployment'"
}"#;

/// Tailoring rules: keyword budgets, metric preservation, bullet strategy.
pub const TAILORING_RULES: &str = r#"CRITICAL TAILORING RULES FOR THIS JOB:
1. **Match job priorities exactly**: If job emphasizes PyTorch, feature it prominently. If quality/testing, emphasize that. Don't use generic framing.
2. **Keyword frequency limits**:
   - Any single term: 2-4 times MAX across entire resume
   - "Agentic/agent": 3-4 times MAX (only if job mentions it 2+ times)
   - "PyTorch": 3-5 times if mentioned in requirements
   - "Quality/QA": 4-6 times if job is QA-focused
   - "Testing": 3-5 times if automated testing is key
3. **Preserve ALL metrics**: 30%, 62%, 850ms to 320ms, 18%, 45%, 98%+, 15M+, 25%
4. **Experience bullet strategy**:
   - Start with action verbs: Designed, Engineered, Developed, Built, Implemented, Optimized, Architected
   - Reframe SAME achievements to match THIS job's focus
   - Jefferies: 5 bullets emphasizing what THIS job needs most
   - Experian: 4-5 bullets emphasizing what THIS job needs most
5. **Technical skills**: Reorder tools within each category to put job-critical tech FIRST in each list
6. **PhD preference**: If job prefers PhD, emphasize Master's + 3 years experience + research-oriented projects
7. **C++ requirement**: If job requires C++, mention in skills AND add to at least one experience bullet
8. **Cross-functional collaboration**: If mentioned in job, emphasize teamwork, mentoring, communication in bullets
9. **Natural language**: Write like a human. Vary vocabulary. Don't stuff keywords robotically.
10. **Project descriptions**: 1-2 sentences highlighting technologies mentioned in THIS job description"#;

/// Self-check list the model runs before returning.
pub const QUALITY_CHECKLIST: &str = r#"QUALITY CHECK BEFORE RETURNING:
- Does summary directly address THIS job's main focus?
- Does detected_category match the strongest signals in the posting?
- Are technical skills ordered with THIS job's priorities first?
- Do experience bullets emphasize what THIS job cares about most?
- Is keyword usage natural (not repetitive/robotic)?
- Are all metrics preserved?
- Will this pass ATS for THIS specific job?"#;

/// Top-level prompt template. Block constants are substituted first, then
/// the caller-supplied fields.
const TAILORING_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer and ATS optimization specialist. Analyze this job description and generate tailored resume content for Arun Kumar Chukkala.

{candidate_background}

{core_projects}

{category_detection}

JOB DESCRIPTION:
{job_description}

COMPANY: {company_name}
ROLE: {role_title}

{output_skeleton}

{tailoring_rules}

{quality_checklist}

Return ONLY valid JSON - no markdown, no code blocks, no preamble:"#;

/// Renders the full tailoring prompt for one request.
/// Pure function of its inputs plus the fixed template constants.
pub fn build_tailoring_prompt(
    job_description: &str,
    company_name: &str,
    role_title: &str,
) -> String {
    TAILORING_PROMPT_TEMPLATE
        .replace("{candidate_background}", CANDIDATE_BACKGROUND)
        .replace("{core_projects}", CORE_PROJECTS)
        .replace("{category_detection}", CATEGORY_DETECTION)
        .replace("{output_skeleton}", OUTPUT_SKELETON)
        .replace("{tailoring_rules}", TAILORING_RULES)
        .replace("{quality_checklist}", QUALITY_CHECKLIST)
        .replace("{job_description}", job_description)
        .replace("{company_name}", company_name)
        .replace("{role_title}", role_title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tailoring::result::REQUIRED_KEYS;

    const SAMPLE_JD: &str = "We are hiring a Senior ML Engineer to build RAG pipelines \
        with LangChain and deploy LLM services on Kubernetes.";

    #[test]
    fn test_prompt_embeds_caller_fields() {
        let prompt = build_tailoring_prompt(SAMPLE_JD, "Acme Corp", "Senior_ML_Engineer");
        assert!(prompt.contains(SAMPLE_JD));
        assert!(prompt.contains("COMPANY: Acme Corp"));
        assert!(prompt.contains("ROLE: Senior_ML_Engineer"));
    }

    #[test]
    fn test_prompt_embeds_fixed_background_blocks() {
        let prompt = build_tailoring_prompt(SAMPLE_JD, "Acme Corp", "Senior_ML_Engineer");
        assert!(prompt.contains("CANDIDATE BACKGROUND:"));
        assert!(prompt.contains("Jefferies Group"));
        assert!(prompt.contains("CORE PROJECTS:"));
        assert!(prompt.contains("Multimodal Medical Assistant"));
    }

    #[test]
    fn test_prompt_contains_all_five_categories() {
        let prompt = build_tailoring_prompt(SAMPLE_JD, "Acme Corp", "Senior_ML_Engineer");
        for category in [
            "GenAI_LLM_Specialist",
            "ML_Platform_Engineer",
            "Applied_ML_Scientist",
            "Multimodal_Vision_Engineer",
            "AI_Quality_Engineer",
        ] {
            assert!(prompt.contains(category), "missing category {category}");
        }
    }

    #[test]
    fn test_prompt_skeleton_names_every_required_key() {
        let prompt = build_tailoring_prompt(SAMPLE_JD, "Acme Corp", "Senior_ML_Engineer");
        for key in REQUIRED_KEYS {
            assert!(
                prompt.contains(&format!("\"{key}\"")),
                "skeleton missing key {key}"
            );
        }
    }

    #[test]
    fn test_prompt_leaves_no_unfilled_placeholders() {
        let prompt = build_tailoring_prompt(SAMPLE_JD, "Acme Corp", "Senior_ML_Engineer");
        for placeholder in [
            "{candidate_background}",
            "{core_projects}",
            "{category_detection}",
            "{output_skeleton}",
            "{tailoring_rules}",
            "{quality_checklist}",
            "{job_description}",
            "{company_name}",
            "{role_title}",
        ] {
            assert!(!prompt.contains(placeholder), "unfilled {placeholder}");
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_tailoring_prompt(SAMPLE_JD, "Acme Corp", "Senior_ML_Engineer");
        let b = build_tailoring_prompt(SAMPLE_JD, "Acme Corp", "Senior_ML_Engineer");
        assert_eq!(a, b);
    }
}
