// 計測オーケストレーションレイヤー

pub mod session;

pub use session::MeasureSession;
