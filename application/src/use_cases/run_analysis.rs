//! Run Analysis use case
//!
//! Orchestrates one analysis run: validate, extract, gate, generate.
//!
//! ```text
//! validate ──▶ extract (per slot) ──▶ gate ──▶ generate (gap, outline)
//!    │                                  │
//!    └─ InputValidationError            └─ InsufficientData
//! ```
//!
//! Expected per-item failures (one URL, one model call) are recorded and
//! the run carries on. Only validation and the gate stop it. They are
//! logged at `info`; the progress notifier and the output show them to
//! the user.

use crate::config::AnalysisParams;
use crate::ports::content_extractor::ContentExtractor;
use crate::ports::llm_gateway::{GatewayError, LlmClientFactory, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use gapscout_domain::core::string::char_len;
use gapscout_domain::{
    AnalysisRequest, AnalysisResult, DomainError, ExtractionReport, GenerationTask, Keyword,
    LlmClientConfig, MAX_COMPETITORS, Phase, PromptTemplate, Slot, SlotOutcome, TaskType,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Input problems detected before any network call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputValidationError {
    #[error("Please enter your API key first")]
    MissingApiKey,

    #[error("Please enter a keyword")]
    MissingKeyword,

    #[error("Please enter your URL for Gap Analysis")]
    MissingTargetUrl,
}

/// Errors that stop a run before any model call
#[derive(Error, Debug)]
pub enum RunAnalysisError {
    #[error(transparent)]
    Validation(#[from] InputValidationError),

    #[error("Could not scrape enough content ({reason}). Check URLs and Debug View.")]
    InsufficientData {
        reason: DomainError,
        extraction: ExtractionReport,
    },
}

impl RunAnalysisError {
    /// Extraction outcomes gathered before the run stopped, if any
    pub fn extraction(&self) -> Option<&ExtractionReport> {
        match self {
            RunAnalysisError::Validation(_) => None,
            RunAnalysisError::InsufficientData { extraction, .. } => Some(extraction),
        }
    }
}

/// A failure in the generate phase; recorded, never propagated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Failed to initialize client: {0}")]
    ClientInitialization(GatewayError),

    #[error("Error calling LLM: {0}")]
    GapReport(GatewayError),

    #[error("Error generating outline: {0}")]
    Outline(GatewayError),
}

impl GenerationError {
    fn for_task(task: GenerationTask, error: GatewayError) -> Self {
        match task {
            GenerationTask::GapReport => GenerationError::GapReport(error),
            GenerationTask::Outline => GenerationError::Outline(error),
        }
    }

    /// The call that failed; `None` when no call could be attempted
    pub fn task(&self) -> Option<GenerationTask> {
        match self {
            GenerationError::ClientInitialization(_) => None,
            GenerationError::GapReport(_) => Some(GenerationTask::GapReport),
            GenerationError::Outline(_) => Some(GenerationTask::Outline),
        }
    }
}

/// Input for the RunAnalysis use case
///
/// Mirrors the form fields of one user action. Built fresh per run.
#[derive(Debug, Clone)]
pub struct RunAnalysisInput {
    /// Target keyword (raw, validated by the use case)
    pub keyword: String,
    /// Connection settings for the model
    pub client: LlmClientConfig,
    /// What to produce
    pub task_type: TaskType,
    /// Target page, required for gap analysis
    pub target_url: Option<String>,
    /// Competitor slots in the order the user entered them
    pub competitor_urls: [Option<String>; MAX_COMPETITORS],
    /// Also produce an outline in gap-analysis mode
    pub also_outline: bool,
}

impl RunAnalysisInput {
    pub fn new(keyword: impl Into<String>, client: LlmClientConfig, task_type: TaskType) -> Self {
        Self {
            keyword: keyword.into(),
            client,
            task_type,
            target_url: None,
            competitor_urls: Default::default(),
            also_outline: true,
        }
    }

    pub fn with_target_url(mut self, url: impl Into<String>) -> Self {
        self.target_url = Some(url.into());
        self
    }

    /// Fill competitor slots in order; anything past the last slot is ignored
    pub fn with_competitor_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (slot, url) in self.competitor_urls.iter_mut().zip(urls) {
            *slot = Some(url.into());
        }
        self
    }

    pub fn without_outline(mut self) -> Self {
        self.also_outline = false;
        self
    }

    /// Whether the outline call runs: always for outline mode, optional for gap mode
    pub fn wants_outline(&self) -> bool {
        match self.task_type {
            TaskType::OutlineGeneration => true,
            TaskType::GapAnalysis => self.also_outline,
        }
    }

    fn target(&self) -> Option<&str> {
        non_blank(self.target_url.as_deref())
    }

    fn competitors(&self) -> impl Iterator<Item = (Slot, &str)> {
        self.competitor_urls
            .iter()
            .enumerate()
            .filter_map(|(i, url)| non_blank(url.as_deref()).map(|u| (Slot::Competitor(i + 1), u)))
    }
}

fn non_blank(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|u| !u.is_empty())
}

/// Output of a run that passed the gate
#[derive(Debug, Clone)]
pub struct RunAnalysisOutput {
    /// The request the prompts were built from
    pub request: AnalysisRequest,
    /// Per-slot extraction outcomes
    pub extraction: ExtractionReport,
    /// Generated markdown
    pub result: AnalysisResult,
    /// Generation failures, in the order they happened
    pub errors: Vec<GenerationError>,
}

/// Use case for running a content analysis
pub struct RunAnalysisUseCase<E: ContentExtractor + 'static, F: LlmClientFactory + 'static> {
    extractor: Arc<E>,
    clients: Arc<F>,
    params: AnalysisParams,
}

impl<E: ContentExtractor + 'static, F: LlmClientFactory + 'static> RunAnalysisUseCase<E, F> {
    pub fn new(extractor: Arc<E>, clients: Arc<F>) -> Self {
        Self {
            extractor,
            clients,
            params: AnalysisParams::default(),
        }
    }

    pub fn with_params(mut self, params: AnalysisParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunAnalysisInput,
    ) -> Result<RunAnalysisOutput, RunAnalysisError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunAnalysisInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<RunAnalysisOutput, RunAnalysisError> {
        let keyword = Self::validate(&input)?;

        info!(
            "Starting {} for \"{}\" with model {}",
            input.task_type.display_name(),
            keyword,
            input.client.model_name
        );

        // Phase 1: Extract
        let extraction = self.phase_extract(&input, progress).await;

        // Gate
        let request = match extraction.to_request(keyword, input.task_type) {
            Ok(request) => request,
            Err(reason) => {
                info!("Not enough content to proceed: {}", reason);
                return Err(RunAnalysisError::InsufficientData { reason, extraction });
            }
        };

        // Phase 2: Generate
        let (result, errors) = self.phase_generate(&input, &request, progress).await;

        Ok(RunAnalysisOutput {
            request,
            extraction,
            result,
            errors,
        })
    }

    fn validate(input: &RunAnalysisInput) -> Result<Keyword, InputValidationError> {
        if !input.client.has_credential() {
            return Err(InputValidationError::MissingApiKey);
        }
        let keyword =
            Keyword::parse(input.keyword.as_str()).map_err(|_| InputValidationError::MissingKeyword)?;
        if input.task_type.requires_target() && input.target().is_none() {
            return Err(InputValidationError::MissingTargetUrl);
        }
        Ok(keyword)
    }

    /// Phase 1: Fetch every provided slot, one after another
    async fn phase_extract(
        &self,
        input: &RunAnalysisInput,
        progress: &dyn ProgressNotifier,
    ) -> ExtractionReport {
        let target = if input.task_type.requires_target() {
            input.target()
        } else {
            None
        };
        let competitors: Vec<_> = input.competitors().collect();

        info!("Phase 1: Extract");
        progress.on_phase_start(
            &Phase::Extract,
            usize::from(target.is_some()) + competitors.len(),
        );

        let mut report = ExtractionReport::default();

        if let Some(url) = target {
            report.target = Some(self.extract_slot(Slot::Target, url, progress).await);
        }

        for (slot, url) in competitors {
            let outcome = self.extract_slot(slot, url, progress).await;
            report.competitors.push(outcome);
        }

        progress.on_phase_complete(&Phase::Extract);
        report
    }

    async fn extract_slot(
        &self,
        slot: Slot,
        url: &str,
        progress: &dyn ProgressNotifier,
    ) -> SlotOutcome {
        progress.on_slot_start(&slot, url);

        let outcome = match self.extractor.extract(url).await {
            Ok(Some(page)) if !page.is_empty() => {
                debug!("{} extracted {} chars from {}", slot, page.len(), url);
                SlotOutcome::extracted(slot, page)
            }
            Ok(_) => {
                info!("{} returned no text from {}", slot, url);
                SlotOutcome::failed(slot, url, "returned no text (may be blocked or JS-rendered)")
            }
            Err(e) => {
                info!("Could not scrape {}: {}", slot, e);
                SlotOutcome::failed(slot, url, e.to_string())
            }
        };

        let low_confidence = outcome
            .page()
            .is_some_and(|page| page.is_low_confidence(self.params.low_confidence_chars));
        if low_confidence {
            info!(
                "{} content is very short; it might be blocked or require login",
                slot
            );
        }

        progress.on_slot_complete(&outcome, low_confidence);
        outcome
    }

    /// Phase 2: Build the client once, then run each requested call independently
    async fn phase_generate(
        &self,
        input: &RunAnalysisInput,
        request: &AnalysisRequest,
        progress: &dyn ProgressNotifier,
    ) -> (AnalysisResult, Vec<GenerationError>) {
        let mut tasks = Vec::new();
        if request.task_type() == TaskType::GapAnalysis {
            tasks.push(GenerationTask::GapReport);
        }
        if input.wants_outline() {
            tasks.push(GenerationTask::Outline);
        }

        info!("Phase 2: Generate ({} calls)", tasks.len());
        progress.on_phase_start(&Phase::Generate, tasks.len());

        let mut result = AnalysisResult::default();
        let mut errors = Vec::new();

        let gateway = match self.clients.connect(&input.client) {
            Ok(gateway) => gateway,
            Err(e) => {
                info!("Failed to initialize client: {}", e);
                errors.push(GenerationError::ClientInitialization(e));
                progress.on_phase_complete(&Phase::Generate);
                return (result, errors);
            }
        };

        let keyword = request.keyword().as_str();
        let competitor_texts = request.competitor_texts();

        for task in tasks {
            let (system, prompt) = match task {
                GenerationTask::GapReport => (
                    PromptTemplate::gap_system(),
                    PromptTemplate::gap_prompt(keyword, request.own_text(), &competitor_texts),
                ),
                GenerationTask::Outline => (
                    PromptTemplate::outline_system(),
                    PromptTemplate::outline_prompt(keyword, &competitor_texts),
                ),
            };
            self.check_prompt_size(&task, &prompt, progress);

            match Self::generate(gateway.as_ref(), system, &prompt).await {
                Ok(markdown) => {
                    info!("{} generated ({} chars)", task, char_len(&markdown));
                    progress.on_generation_complete(&task, true);
                    match task {
                        GenerationTask::GapReport => result.report_markdown = Some(markdown),
                        GenerationTask::Outline => result.outline_markdown = Some(markdown),
                    }
                }
                Err(e) => {
                    info!("{} failed: {}", task, e);
                    progress.on_generation_complete(&task, false);
                    errors.push(GenerationError::for_task(task, e));
                }
            }
        }

        progress.on_phase_complete(&Phase::Generate);
        (result, errors)
    }

    /// Warn about oversized prompts; the prompt is still sent as-is
    fn check_prompt_size(&self, task: &GenerationTask, prompt: &str, progress: &dyn ProgressNotifier) {
        let Some(limit) = self.params.prompt_warn_chars else {
            return;
        };
        let chars = char_len(prompt);
        if chars > limit {
            info!(
                "{} prompt is {} chars (warning threshold {}); the provider may truncate or reject it",
                task, chars, limit
            );
            progress.on_prompt_oversized(task, chars, limit);
        }
    }

    async fn generate(
        gateway: &dyn LlmGateway,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        let session = gateway.create_session_with_system_prompt(system_prompt).await?;
        session.send(prompt).await
    }
}
