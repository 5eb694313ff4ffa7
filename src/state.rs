use crate::source::PostSource;
use std::path::PathBuf;
use std::sync::Arc;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

pub struct State {
    pub posts: Box<dyn PostSource>,
    pub public_dir: PathBuf,
}

impl State {
    pub fn new(posts: impl PostSource + 'static, public_dir: PathBuf) -> State {
        State {
            posts: Box::new(posts),
            public_dir,
        }
    }
}
