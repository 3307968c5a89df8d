#[derive(Debug, Default, Clone, Copy)]
pub struct ProfileQueryService;

impl ProfileQueryService {
    pub fn new() -> Self {
        Self
    }
}
