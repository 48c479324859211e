// Defines actions the key handlers hand back to the main loop.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
}
