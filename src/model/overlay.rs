//! Overlay flags for the shell
//!
//! The three overlays are independent: opening one never closes another, so
//! more than one can be visible at a time. Input goes to the topmost open one.

/// Identifies one of the shell's overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Settings editor
    Settings,
    /// Resume-or-start-new prompt shown at startup
    LoadSession,
    /// Model configuration dialog
    ModelConfig,
}

impl Overlay {
    /// Bottom to top drawing order
    pub const Z_ORDER: [Overlay; 3] = [Overlay::Settings, Overlay::LoadSession, Overlay::ModelConfig];
}

/// Open/closed state for every overlay
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OverlaySet {
    settings: bool,
    load_session: bool,
    model_config: bool,
}

impl OverlaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, overlay: Overlay) {
        *self.flag_mut(overlay) = true;
    }

    pub fn close(&mut self, overlay: Overlay) {
        *self.flag_mut(overlay) = false;
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Settings => self.settings,
            Overlay::LoadSession => self.load_session,
            Overlay::ModelConfig => self.model_config,
        }
    }

    /// Open overlays from bottom to top
    pub fn visible(&self) -> impl Iterator<Item = Overlay> + '_ {
        Overlay::Z_ORDER.into_iter().filter(|o| self.is_open(*o))
    }

    /// The overlay that receives input, if any is open
    pub fn top(&self) -> Option<Overlay> {
        self.visible().last()
    }

    pub fn is_empty(&self) -> bool {
        self.top().is_none()
    }

    fn flag_mut(&mut self, overlay: Overlay) -> &mut bool {
        match overlay {
            Overlay::Settings => &mut self.settings,
            Overlay::LoadSession => &mut self.load_session,
            Overlay::ModelConfig => &mut self.model_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlays_start_closed() {
        let overlays = OverlaySet::new();
        assert!(overlays.is_empty());
        assert!(overlays.top().is_none());
    }

    #[test]
    fn test_overlays_are_independent() {
        let mut overlays = OverlaySet::new();
        overlays.open(Overlay::Settings);
        overlays.open(Overlay::ModelConfig);

        assert!(overlays.is_open(Overlay::Settings));
        assert!(overlays.is_open(Overlay::ModelConfig));
        assert!(!overlays.is_open(Overlay::LoadSession));

        overlays.close(Overlay::ModelConfig);
        assert!(overlays.is_open(Overlay::Settings));
        assert!(!overlays.is_open(Overlay::ModelConfig));
    }

    #[test]
    fn test_top_follows_z_order() {
        let mut overlays = OverlaySet::new();
        overlays.open(Overlay::ModelConfig);
        overlays.open(Overlay::Settings);
        assert_eq!(overlays.top(), Some(Overlay::ModelConfig));

        overlays.open(Overlay::LoadSession);
        let visible: Vec<_> = overlays.visible().collect();
        assert_eq!(
            visible,
            vec![Overlay::Settings, Overlay::LoadSession, Overlay::ModelConfig]
        );

        overlays.close(Overlay::ModelConfig);
        assert_eq!(overlays.top(), Some(Overlay::LoadSession));
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut overlays = OverlaySet::new();
        overlays.open(Overlay::Settings);
        overlays.open(Overlay::Settings);
        overlays.close(Overlay::Settings);
        assert!(overlays.is_empty());
    }
}
