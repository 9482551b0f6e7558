//! Attach/detach lifecycle of device handles.
//!
//! The registry holds one reference to each attached [`RazerDevice`].
//! Callers may clone the `Arc` and keep using a handle after detach; it is
//! freed when the last reference goes away.

use crate::config::TimingConfig;
use crate::dispatch::RazerDevice;
use crate::error::{Error, Result};
use crate::transport::ControlTransport;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct DeviceRegistry {
    timing: TimingConfig,
    devices: Mutex<HashMap<String, Arc<RazerDevice>>>,
}

impl DeviceRegistry {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            devices: Mutex::new(HashMap::new()),
        }
    }

    fn devices(&self) -> Result<MutexGuard<'_, HashMap<String, Arc<RazerDevice>>>> {
        self.devices
            .lock()
            .map_err(|_| Error::Resource("device registry lock poisoned".into()))
    }

    /// Create a handle for `pid`, apply its attach-time mode and register it
    /// under `key`. An existing handle under the same key is replaced.
    pub fn attach(
        &self,
        key: &str,
        pid: u16,
        transport: Box<dyn ControlTransport>,
    ) -> Result<Arc<RazerDevice>> {
        let device = Arc::new(RazerDevice::open(pid, transport, &self.timing)?);
        device.initialize()?;

        let previous = self.devices()?.insert(key.to_string(), Arc::clone(&device));
        if previous.is_some() {
            warn!(key, "Replacing existing device handle");
        }
        info!(
            key,
            model = device.name(),
            pid = format_args!("0x{pid:04X}"),
            "Device attached"
        );
        Ok(device)
    }

    pub fn get(&self, key: &str) -> Result<Option<Arc<RazerDevice>>> {
        Ok(self.devices()?.get(key).cloned())
    }

    /// Drop the registry's reference. Returns the handle if one was attached.
    pub fn detach(&self, key: &str) -> Result<Option<Arc<RazerDevice>>> {
        let removed = self.devices()?.remove(key);
        if let Some(device) = &removed {
            info!(key, model = device.name(), "Device detached");
        }
        Ok(removed)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.devices()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
