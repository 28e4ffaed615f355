//! Ports - 抽象化レイヤー
//!
//! 各 trait は外部システム（HTTP エンドポイント、エディタ、UI、時刻）への
//! インターフェースを提供し、実装の詳細を隠蔽します。テストでは test double
//! に差し替えます。

pub mod clock;
pub mod editor;
pub mod notifier;
pub mod transport;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::editor::{ActiveDocument, DocumentSource};
pub use self::notifier::Notifier;
pub use self::transport::{Transport, TransportFailure, TransportResponse};
