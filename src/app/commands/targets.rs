use crate::domain::{AppError, LaunchRequest, Target, parse_targets};
use crate::ports::ProjectStore;

/// Load the targets for a request; ad hoc sessions have none.
pub fn load<P: ProjectStore + ?Sized>(
    project: &P,
    request: &LaunchRequest,
) -> Result<Vec<Target>, AppError> {
    if request.is_adhoc() {
        return Ok(Vec::new());
    }

    let content = project.read_targets(request.stack, request.target_type)?;
    parse_targets(&content, request.target_type)
}
