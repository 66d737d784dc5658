//! Windows Core Audio provider.
//!
//! Enumeration goes through `IMMDeviceEnumerator`; the default end-point is
//! changed through the undocumented `IPolicyConfigVista` interface, which is
//! what the Sound control panel uses. All COM references are released by the
//! `windows` crate's `Drop` impls; the apartment and CoTaskMem strings get the
//! small guards below.

use crate::device::DeviceState;
use crate::error::{ControllerError, ProviderError};
use crate::provider::DeviceProvider;
use std::ffi::c_void;
use tracing::debug;
use windows::Win32::Devices::FunctionDiscovery::PKEY_Device_FriendlyName;
use windows::Win32::Foundation::E_FAIL;
use windows::Win32::Media::Audio::{
    eConsole, eRender, IMMDevice, IMMDeviceEnumerator, MMDeviceEnumerator, DEVICE_STATE,
    DEVICE_STATE_ACTIVE, DEVICE_STATE_DISABLED, DEVICE_STATE_NOTPRESENT, DEVICE_STATE_UNPLUGGED,
};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoTaskMemFree, CoUninitialize, CLSCTX_ALL,
    COINIT_APARTMENTTHREADED, STGM_READ,
};
use windows_core::{HSTRING, PCWSTR, PWSTR};

mod policy_config;

use policy_config::{IPolicyConfigVista, CLSID_POLICY_CONFIG_VISTA_CLIENT};

/// Single-threaded COM apartment for the current thread.
struct ComApartment;

impl ComApartment {
    fn initialize() -> Result<Self, ProviderError> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }.ok()?;
        Ok(Self)
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

/// String allocated by COM with `CoTaskMemAlloc`.
struct CoTaskString(PWSTR);

impl CoTaskString {
    fn to_owned_string(&self) -> Result<String, ProviderError> {
        unsafe { self.0.to_string() }
            .map_err(|e| ProviderError::new(E_FAIL.0, format!("invalid UTF-16 identifier: {}", e)))
    }
}

impl Drop for CoTaskString {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe { CoTaskMemFree(Some(self.0.as_ptr() as *const c_void)) };
        }
    }
}

fn state_mask(state: DeviceState) -> DEVICE_STATE {
    match state {
        DeviceState::Active => DEVICE_STATE_ACTIVE,
        DeviceState::Disabled => DEVICE_STATE_DISABLED,
        DeviceState::NotPresent => DEVICE_STATE_NOTPRESENT,
        DeviceState::Unplugged => DEVICE_STATE_UNPLUGGED,
    }
}

pub struct WasapiProvider {
    // declared before the apartment so it is released before CoUninitialize
    enumerator: IMMDeviceEnumerator,
    _apartment: ComApartment,
}

impl WasapiProvider {
    pub fn open() -> Result<Self, ControllerError> {
        let apartment = ComApartment::initialize().map_err(ControllerError::Initialization)?;
        let enumerator: IMMDeviceEnumerator =
            unsafe { CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL) }
                .map_err(|e| ControllerError::Initialization(e.into()))?;
        debug!("Created MMDeviceEnumerator");
        Ok(Self {
            enumerator,
            _apartment: apartment,
        })
    }
}

impl DeviceProvider for WasapiProvider {
    type Endpoint = IMMDevice;

    fn render_endpoints(&self, state: DeviceState) -> Result<Vec<IMMDevice>, ProviderError> {
        let collection = unsafe { self.enumerator.EnumAudioEndpoints(eRender, state_mask(state)) }?;
        let count = unsafe { collection.GetCount() }?;
        debug!(count, %state, "Enumerated render end-points");
        (0..count)
            .map(|i| unsafe { collection.Item(i) }.map_err(ProviderError::from))
            .collect()
    }

    fn identifier(&self, endpoint: &IMMDevice) -> Result<String, ProviderError> {
        let id = CoTaskString(unsafe { endpoint.GetId() }?);
        id.to_owned_string()
    }

    fn friendly_name(&self, endpoint: &IMMDevice) -> Result<String, ProviderError> {
        let store = unsafe { endpoint.OpenPropertyStore(STGM_READ) }?;
        let value = unsafe { store.GetValue(&PKEY_Device_FriendlyName) }?;
        Ok(value.to_string())
    }

    fn set_default_endpoint(&self, identifier: &str) -> Result<(), ProviderError> {
        let policy: IPolicyConfigVista =
            unsafe { CoCreateInstance(&CLSID_POLICY_CONFIG_VISTA_CLIENT, None, CLSCTX_ALL) }?;
        let id = HSTRING::from(identifier);
        unsafe { policy.SetDefaultEndpoint(PCWSTR(id.as_ptr()), eConsole) }.ok()?;
        Ok(())
    }
}
