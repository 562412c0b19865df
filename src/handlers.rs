pub mod getvideo;

pub use getvideo::{process_video, Delivery};
