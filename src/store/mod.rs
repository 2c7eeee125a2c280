mod device;
mod traits;

pub use device::DeviceContactStore;
pub use traits::ContactStore;
