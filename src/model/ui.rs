//! UI state - workspace layout and focus

/// Initial width of the chat pane, in columns
pub const CHAT_PANE_INITIAL_WIDTH: u16 = 60;
/// Chat pane and the workspace column never shrink below this
pub const PANE_MIN_WIDTH: u16 = 40;
/// Rows subtracted from the viewport height for the initial workspace height
pub const WORKSPACE_HEIGHT_OFFSET: u16 = 16;
/// Workspace and terminal panes never shrink below this
pub const PANE_MIN_HEIGHT: u16 = 6;

const WIDTH_STEP: u16 = 4;
const HEIGHT_STEP: u16 = 2;

/// Pane that has keyboard focus on the home route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    #[default]
    Chat,
    Workspace,
    Terminal,
}

impl PaneFocus {
    pub fn next(&self) -> PaneFocus {
        match self {
            PaneFocus::Chat => PaneFocus::Workspace,
            PaneFocus::Workspace => PaneFocus::Terminal,
            PaneFocus::Terminal => PaneFocus::Chat,
        }
    }

    pub fn prev(&self) -> PaneFocus {
        match self {
            PaneFocus::Chat => PaneFocus::Terminal,
            PaneFocus::Workspace => PaneFocus::Chat,
            PaneFocus::Terminal => PaneFocus::Workspace,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            PaneFocus::Chat => "Chat",
            PaneFocus::Workspace => "Workspace",
            PaneFocus::Terminal => "Terminal",
        }
    }
}

/// Direction to move a split divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAdjust {
    WidenChat,
    NarrowChat,
    GrowWorkspace,
    ShrinkWorkspace,
}

/// Requested sizes of the two splits on the home route
///
/// Computed once when the layout is first rendered. Terminal resizes do not
/// recompute them; the layout clamps them to whatever space is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSizes {
    /// Width of the chat pane in the outer horizontal split
    pub chat_width: u16,
    /// Height of the workspace pane in the inner vertical split
    pub workspace_height: u16,
}

impl SplitSizes {
    /// Sizes for a layout first rendered in a viewport of the given height
    pub fn initial(viewport_height: u16) -> Self {
        Self {
            chat_width: CHAT_PANE_INITIAL_WIDTH,
            workspace_height: viewport_height
                .saturating_sub(WORKSPACE_HEIGHT_OFFSET)
                .max(PANE_MIN_HEIGHT),
        }
    }

    pub fn adjust(&mut self, adjust: SplitAdjust) {
        match adjust {
            SplitAdjust::WidenChat => {
                self.chat_width = self.chat_width.saturating_add(WIDTH_STEP);
            }
            SplitAdjust::NarrowChat => {
                self.chat_width = self.chat_width.saturating_sub(WIDTH_STEP).max(PANE_MIN_WIDTH);
            }
            SplitAdjust::GrowWorkspace => {
                self.workspace_height = self.workspace_height.saturating_add(HEIGHT_STEP);
            }
            SplitAdjust::ShrinkWorkspace => {
                self.workspace_height = self
                    .workspace_height
                    .saturating_sub(HEIGHT_STEP)
                    .max(PANE_MIN_HEIGHT);
            }
        }
    }
}
