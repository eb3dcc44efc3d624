/// Port for reading release inputs from the environment.
pub trait EnvSource {
    /// Value of `key`, or `None` when it is unset.
    fn var(&self, key: &str) -> Option<String>;
}
