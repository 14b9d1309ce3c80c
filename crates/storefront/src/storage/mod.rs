mod local;

pub use self::local::LocalFileStorage;
