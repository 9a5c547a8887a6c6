//! Quick actions - every simulated form submission and the toast it raises.
//!
//! Submitting an action never touches a domain store. The only observable
//! effect is the confirmation toast shown on the next page.

use crate::{
    core::insights::AiFeature,
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Transient confirmation message shown once after a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Bold first line
    pub title: String,
    /// Detail line
    pub description: String,
}

impl Toast {
    /// Creates a toast from any two strings.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Toast after a message is posted to a chat room.
    #[must_use]
    pub fn message_sent(room: &str) -> Self {
        Self::new("Message Sent", format!("Your message has been sent to {room}."))
    }

    /// Toast after the design assistant answers a prompt.
    #[must_use]
    pub fn design_generated() -> Self {
        Self::new("Design Generated", "Your AI design has been created successfully.")
    }
}

/// Heading and sub-heading of a modal dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogText {
    /// Dialog title
    pub title: &'static str,
    /// Dialog description
    pub description: &'static str,
}

const fn dialog(title: &'static str, description: &'static str) -> Option<DialogText> {
    Some(DialogText { title, description })
}

/// A simulated submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuickAction {
    /// Projects page: new project
    CreateProject,
    /// Clients page: new client
    AddClient,
    /// Teams page: invite a member
    InviteMember,
    /// Payments page: new invoice
    GenerateInvoice,
    /// Payments page: contract upload
    UploadContract,
    /// Payments page: AI contract analysis
    AnalyzeContract,
    /// Project overview: blueprint upload
    UploadBlueprint,
    /// Project overview: meeting
    ScheduleMeeting,
    /// Project overview: progress report
    GenerateProjectReport,
    /// Project chat tab: send
    SendProjectMessage,
    /// Reports page: weekly report
    GenerateWeeklyReport,
    /// Team dashboard: AI design suggestions
    GenerateSuggestions,
    /// Client dashboard: ask the virtual assistant
    AskAssistant,
    /// Communication page: attach a file
    AttachFile,
    /// Settings page: any save button
    SaveSettings,
    /// Settings page: two-factor setup
    EnableTwoFactor,
    /// Login page: forgotten password
    ResetPassword,
    /// Login page: client self-registration
    RegisterClient,
    /// AI Insights page: run a tool
    LaunchFeature(AiFeature),
}

impl QuickAction {
    /// Every action without a payload, in no particular order.
    pub const SIMPLE: [Self; 18] = [
        Self::CreateProject,
        Self::AddClient,
        Self::InviteMember,
        Self::GenerateInvoice,
        Self::UploadContract,
        Self::AnalyzeContract,
        Self::UploadBlueprint,
        Self::ScheduleMeeting,
        Self::GenerateProjectReport,
        Self::SendProjectMessage,
        Self::GenerateWeeklyReport,
        Self::GenerateSuggestions,
        Self::AskAssistant,
        Self::AttachFile,
        Self::SaveSettings,
        Self::EnableTwoFactor,
        Self::ResetPassword,
        Self::RegisterClient,
    ];

    /// Quick actions on the project overview tab, in display order.
    pub const PROJECT_OVERVIEW: [Self; 3] = [
        Self::UploadBlueprint,
        Self::ScheduleMeeting,
        Self::GenerateProjectReport,
    ];

    /// URL segment for `POST /actions/:action` and `?dialog=`.
    #[must_use]
    pub fn slug(self) -> String {
        let slug = match self {
            Self::CreateProject => "create-project",
            Self::AddClient => "add-client",
            Self::InviteMember => "invite-member",
            Self::GenerateInvoice => "generate-invoice",
            Self::UploadContract => "upload-contract",
            Self::AnalyzeContract => "analyze-contract",
            Self::UploadBlueprint => "upload-blueprint",
            Self::ScheduleMeeting => "schedule-meeting",
            Self::GenerateProjectReport => "generate-project-report",
            Self::SendProjectMessage => "send-project-message",
            Self::GenerateWeeklyReport => "generate-weekly-report",
            Self::GenerateSuggestions => "generate-suggestions",
            Self::AskAssistant => "ask-assistant",
            Self::AttachFile => "attach-file",
            Self::SaveSettings => "save-settings",
            Self::EnableTwoFactor => "enable-two-factor",
            Self::ResetPassword => "reset-password",
            Self::RegisterClient => "register-client",
            Self::LaunchFeature(feature) => return format!("launch-{}", feature.slug()),
        };
        slug.to_string()
    }

    /// Button text that opens the dialog or submits directly.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreateProject => "New Project",
            Self::AddClient => "Add Client",
            Self::InviteMember => "Add Member",
            Self::GenerateInvoice => "Generate Invoice",
            Self::UploadContract => "Upload Contract",
            Self::AnalyzeContract => "Analyze Contract",
            Self::UploadBlueprint => "Upload Blueprint",
            Self::ScheduleMeeting => "Schedule Meeting",
            Self::GenerateProjectReport => "Generate Report",
            Self::SendProjectMessage | Self::AskAssistant => "Send",
            Self::GenerateWeeklyReport => "Generate Weekly Report",
            Self::GenerateSuggestions => "AI Design Assistant",
            Self::AttachFile => "Attach",
            Self::SaveSettings => "Save Changes",
            Self::EnableTwoFactor => "Enable",
            Self::ResetPassword => "Forgot Password?",
            Self::RegisterClient => "Register Client",
            Self::LaunchFeature(_) => "Launch",
        }
    }

    /// Dialog heading, or `None` for buttons that submit directly.
    #[must_use]
    pub const fn dialog(self) -> Option<DialogText> {
        match self {
            Self::CreateProject => dialog(
                "Create New Project",
                "Add a new architecture project to your portfolio.",
            ),
            Self::AddClient => dialog("Add New Client", "Register a new client organization."),
            Self::InviteMember => {
                dialog("Add Team Member", "Invite a new member to join your team.")
            }
            Self::GenerateInvoice => {
                dialog("Generate Invoice", "Create a new invoice for a project.")
            }
            Self::UploadContract => {
                dialog("Upload Contract", "Upload a contract document for a project.")
            }
            Self::AnalyzeContract => dialog(
                "AI Contract Analysis",
                "Upload a contract to analyze it for risks, compliance issues, and key terms.",
            ),
            Self::UploadBlueprint => dialog(
                "Upload Blueprint",
                "Upload architectural blueprints and design files.",
            ),
            Self::ScheduleMeeting => dialog(
                "Schedule Meeting",
                "Schedule a meeting with your project team.",
            ),
            Self::GenerateProjectReport => dialog(
                "Generate Project Report",
                "Create a detailed progress report for this project.",
            ),
            Self::GenerateWeeklyReport => dialog(
                "Generate Weekly Report",
                "Configure and generate an AI-powered weekly progress report.",
            ),
            Self::GenerateSuggestions => dialog(
                "AI Design Assistant",
                "Get AI-powered design suggestions and feedback on your architectural concepts.",
            ),
            Self::AskAssistant => dialog(
                "AI Virtual Assistant",
                "Ask questions about your project status, payments, or timeline.",
            ),
            Self::ResetPassword => dialog(
                "Reset Password",
                "Enter your email address and we'll send you a password reset link.",
            ),
            Self::RegisterClient => dialog(
                "Register as Client",
                "Create a client account to track your projects and communicate with your team.",
            ),
            Self::LaunchFeature(feature) => dialog(feature.title(), feature.detail()),
            Self::SendProjectMessage
            | Self::AttachFile
            | Self::SaveSettings
            | Self::EnableTwoFactor => None,
        }
    }

    /// Text of the dialog's confirm button.
    #[must_use]
    pub fn submit_label(self) -> String {
        let label = match self {
            Self::CreateProject => "Create Project",
            Self::AddClient => "Add Client",
            Self::InviteMember => "Send Invitation",
            Self::GenerateInvoice => "Generate",
            Self::UploadContract => "Upload",
            Self::AnalyzeContract => "Analyze",
            Self::GenerateWeeklyReport => "Generate Report",
            Self::GenerateSuggestions => "Generate Suggestions",
            Self::ResetPassword => "Send Reset Link",
            Self::RegisterClient => "Register",
            Self::LaunchFeature(feature) => return format!("Run {}", feature.title()),
            other => other.label(),
        };
        label.to_string()
    }

    /// Confirmation raised once the action is submitted.
    #[must_use]
    pub fn toast(self) -> Toast {
        match self {
            Self::CreateProject => Toast::new(
                "Project Created",
                "Your new project has been created successfully.",
            ),
            Self::AddClient => Toast::new(
                "Client Added",
                "New client has been registered successfully.",
            ),
            Self::InviteMember => Toast::new(
                "Invitation Sent",
                "Team member has been invited via email.",
            ),
            Self::GenerateInvoice => Toast::new(
                "Invoice Generated",
                "Invoice INV-006 has been created successfully.",
            ),
            Self::UploadContract => Toast::new(
                "Contract Uploaded",
                "Your contract has been uploaded for review.",
            ),
            Self::AnalyzeContract => Toast::new(
                "Analysis Started",
                "AI is analyzing your contract. Results will appear shortly.",
            ),
            Self::UploadBlueprint | Self::ScheduleMeeting | Self::GenerateProjectReport => {
                let name = self.label();
                Toast::new(
                    format!("{name} Complete"),
                    format!("{name} action completed successfully."),
                )
            }
            Self::SendProjectMessage => Toast::message_sent("the project chat"),
            Self::GenerateWeeklyReport => Toast::new(
                "Report Generated",
                "Your weekly report has been generated and is ready for download.",
            ),
            Self::GenerateSuggestions => {
                Toast::new("AI Processing", "Generating design suggestions...")
            }
            Self::AskAssistant => Toast::new("Message Sent", "AI is processing your question..."),
            Self::AttachFile => Toast::new("Attach File", "File attachment coming soon."),
            Self::SaveSettings => Toast::new(
                "Settings Saved",
                "Your settings have been updated successfully.",
            ),
            Self::EnableTwoFactor => {
                Toast::new("2FA", "Two-factor authentication setup initiated.")
            }
            Self::ResetPassword => Toast::new(
                "Reset Link Sent",
                "Check your email for the password reset link.",
            ),
            Self::RegisterClient => Toast::new(
                "Registration Submitted",
                "Your account request has been submitted for review.",
            ),
            Self::LaunchFeature(feature) => {
                let name = feature.title();
                Toast::new(
                    format!("{name} Started"),
                    format!("The {name} is now processing. Results will be available shortly."),
                )
            }
        }
    }

    /// Whether a signed-out visitor may submit the action (login page only).
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::ResetPassword | Self::RegisterClient)
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

impl FromStr for QuickAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(action) = Self::SIMPLE.into_iter().find(|a| a.slug() == s) {
            return Ok(action);
        }

        s.strip_prefix("launch-")
            .and_then(|feature| feature.parse().ok())
            .map(Self::LaunchFeature)
            .ok_or_else(|| Error::UnknownAction {
                slug: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_every_slug_parses_back() {
        let launches = AiFeature::ALL.map(QuickAction::LaunchFeature);
        for action in QuickAction::SIMPLE.into_iter().chain(launches) {
            assert_eq!(action.slug().parse::<QuickAction>().unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_slug_errors() {
        let err = "launch-rockets".parse::<QuickAction>().unwrap_err();
        assert!(matches!(err, Error::UnknownAction { slug } if slug == "launch-rockets"));
        assert!("".parse::<QuickAction>().is_err());
    }

    #[test]
    fn test_project_quick_action_toast() {
        let toast = QuickAction::GenerateProjectReport.toast();
        assert_eq!(toast.title, "Generate Report Complete");
        assert_eq!(toast.description, "Generate Report action completed successfully.");
        assert_eq!(
            QuickAction::GenerateProjectReport.dialog().map(|d| d.title),
            Some("Generate Project Report")
        );
    }

    #[test]
    fn test_launch_feature_toast() {
        let toast = QuickAction::LaunchFeature(AiFeature::ChatSummarizer).toast();
        assert_eq!(toast.title, "Chat Summarizer Started");
        assert_eq!(
            toast.description,
            "The Chat Summarizer is now processing. Results will be available shortly."
        );
        assert_eq!(
            QuickAction::LaunchFeature(AiFeature::ChatSummarizer).submit_label(),
            "Run Chat Summarizer"
        );
    }

    #[test]
    fn test_invoice_toast_wording() {
        let toast = QuickAction::GenerateInvoice.toast();
        assert_eq!(toast.title, "Invoice Generated");
        assert_eq!(toast.description, "Invoice INV-006 has been created successfully.");
    }

    #[test]
    fn test_only_login_page_actions_are_public() {
        let public: Vec<_> = QuickAction::SIMPLE
            .into_iter()
            .filter(|a| a.is_public())
            .collect();
        assert_eq!(
            public,
            [QuickAction::ResetPassword, QuickAction::RegisterClient]
        );
        assert!(!QuickAction::LaunchFeature(AiFeature::TaskScheduler).is_public());
    }

    #[test]
    fn test_message_sent_names_room() {
        let toast = Toast::message_sent("Skyline Tower — General");
        assert_eq!(
            toast.description,
            "Your message has been sent to Skyline Tower — General."
        );
    }

    #[test]
    fn test_direct_submit_actions_have_no_dialog() {
        assert!(QuickAction::AttachFile.dialog().is_none());
        assert!(QuickAction::EnableTwoFactor.dialog().is_none());
        assert!(QuickAction::CreateProject.dialog().is_some());
    }
}
