//! Static AI tool catalogue and the canned report insights.

use std::str::FromStr;

/// One of the AI tools offered on the AI Insights page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AiFeature {
    /// Completion-date forecasts
    TimelinePredictor,
    /// Chat digests
    ChatSummarizer,
    /// Concept generation
    DesignGenerator,
    /// Workload balancing
    TaskScheduler,
    /// Contract review
    ContractChecker,
    /// Weekly progress reports
    WeeklyReportGenerator,
}

impl AiFeature {
    /// Cards in display order.
    pub const ALL: [Self; 6] = [
        Self::TimelinePredictor,
        Self::ChatSummarizer,
        Self::DesignGenerator,
        Self::TaskScheduler,
        Self::ContractChecker,
        Self::WeeklyReportGenerator,
    ];

    /// URL segment used by the launch form.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::TimelinePredictor => "timeline-predictor",
            Self::ChatSummarizer => "chat-summarizer",
            Self::DesignGenerator => "design-generator",
            Self::TaskScheduler => "task-scheduler",
            Self::ContractChecker => "contract-checker",
            Self::WeeklyReportGenerator => "weekly-report-generator",
        }
    }

    /// Card and dialog heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TimelinePredictor => "AI Timeline Predictor",
            Self::ChatSummarizer => "Chat Summarizer",
            Self::DesignGenerator => "Design Generator",
            Self::TaskScheduler => "Task Scheduler",
            Self::ContractChecker => "Contract Checker",
            Self::WeeklyReportGenerator => "Weekly Report Generator",
        }
    }

    /// Card text.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::TimelinePredictor => {
                "Predict project timelines based on historical data and current progress."
            }
            Self::ChatSummarizer => "Generate concise summaries of project chat conversations.",
            Self::DesignGenerator => {
                "Create architectural design concepts using AI-assisted generation."
            }
            Self::TaskScheduler => "Automatically optimize task assignments and deadlines.",
            Self::ContractChecker => {
                "Analyze contracts for risks, compliance issues, and key terms."
            }
            Self::WeeklyReportGenerator => {
                "Automatically compile and format weekly project progress reports."
            }
        }
    }

    /// Launch dialog text.
    #[must_use]
    pub const fn detail(self) -> &'static str {
        match self {
            Self::TimelinePredictor => {
                "Analyzes past project data to forecast completion dates and identify potential delays."
            }
            Self::ChatSummarizer => {
                "Processes chat history and extracts key decisions, action items, and discussion points."
            }
            Self::DesignGenerator => {
                "Generates design concepts based on project requirements, site constraints, and style preferences."
            }
            Self::TaskScheduler => {
                "Uses workload analysis and dependency mapping to optimize task scheduling across teams."
            }
            Self::ContractChecker => {
                "Scans contracts for potential risks, missing clauses, and compliance requirements."
            }
            Self::WeeklyReportGenerator => {
                "Aggregates project metrics, milestones, and team updates into a formatted report."
            }
        }
    }
}

impl FromStr for AiFeature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.slug() == s)
            .ok_or_else(|| format!("unknown AI feature: {s}"))
    }
}

/// Canned insight card on the Reports page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insight {
    /// Card heading
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
}

/// Insight cards shown under the Reports charts.
pub const REPORT_INSIGHTS: [Insight; 4] = [
    Insight {
        title: "Revenue Forecast",
        description: "Q2 revenue projected to increase 18% based on current pipeline.",
    },
    Insight {
        title: "Timeline Risk",
        description: "Metro Station Complex may face 2-week delay, suggest resource reallocation.",
    },
    Insight {
        title: "Team Optimization",
        description: "Engineering team utilization at 92%. Consider onboarding for upcoming projects.",
    },
    Insight {
        title: "Cost Efficiency",
        description: "Material costs 8% below estimate on Skyline Tower. Lock in current supplier rates.",
    },
];
