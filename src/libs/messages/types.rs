#[derive(Debug, Clone)]
pub enum Message {
    // === PROJECT MESSAGES ===
    ProjectAdded(String),
    ProjectDeleted,
    PromptProjectName,
    PromptProject,
    NoProjectsYet,

    // === TIME ENTRY MESSAGES ===
    TimeEntryAdded,
    EntryDeleted,
    NoEntriesYet,
    PromptDate,
    PromptDescription,
    PromptHours,

    // === WORKFLOW MESSAGES ===
    PromptSave,
    Goodbye,
}
