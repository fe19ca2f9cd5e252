/// A persisted row with an integer primary key assigned by the store
pub trait Entity: Clone + Send + Sync + 'static {
    /// Primary key value
    fn id(&self) -> i32;

    /// Overwrite the primary key, used when the store assigns one
    fn set_id(&mut self, id: i32);
}
