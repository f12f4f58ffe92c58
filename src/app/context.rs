use crate::domain::TemplateRenderer;
use crate::ports::{LaunchPadStore, ProjectStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: ProjectStore, L: LaunchPadStore, R: TemplateRenderer> {
    project: P,
    launch_pad: L,
    renderer: R,
}

impl<P: ProjectStore, L: LaunchPadStore, R: TemplateRenderer> AppContext<P, L, R> {
    /// Create a new application context.
    pub fn new(project: P, launch_pad: L, renderer: R) -> Self {
        Self { project, launch_pad, renderer }
    }

    /// Get a reference to the project store.
    pub fn project(&self) -> &P {
        &self.project
    }

    /// Get a reference to the launch pad.
    pub fn launch_pad(&self) -> &L {
        &self.launch_pad
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
