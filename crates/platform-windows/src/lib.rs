//! Windows taskbar backend for DockPilot.
//!
//! Wraps `ITaskbarList3` for per-window progress and overlay badges and
//! `FlashWindowEx` for attention requests. The Windows taskbar is strictly
//! per-window, so only the window-scoped capabilities are advertised.

#![cfg(target_os = "windows")]

use dockpilot_core::{
    BadgeImage, Feature, FeatureSet, ProgressState, ProgressValue, Taskbar, TaskbarError,
    TaskbarMenu, WindowHandle, register_taskbar,
};
use std::cell::RefCell;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{CreateBitmap, DeleteObject, HBITMAP};
use windows::Win32::System::Com::{
    CLSCTX_INPROC_SERVER, CoCreateInstance, CoInitializeEx, COINIT_APARTMENTTHREADED,
};
use windows::Win32::UI::Shell::{
    ITaskbarList3, TBPF_ERROR, TBPF_INDETERMINATE, TBPF_NOPROGRESS, TBPF_NORMAL, TBPF_PAUSED,
    TaskbarList,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateIconIndirect, DestroyIcon, FLASHW_ALL, FLASHW_STOP, FLASHW_TIMERNOFG, FLASHWINFO,
    FlashWindowEx, GetActiveWindow, HICON, ICONINFO,
};
use windows::core::w;

static WINDOWS_TASKBAR: WindowsTaskbar = WindowsTaskbar;

register_taskbar!(&WINDOWS_TASKBAR);

thread_local! {
    // ITaskbarList3 is apartment-threaded; the registered backend stays
    // zero-sized and the COM object lives on the UI thread that uses it.
    static TASKBAR_LIST: RefCell<Option<ITaskbarList3>> = const { RefCell::new(None) };
}

struct WindowsTaskbar;

impl Taskbar for WindowsTaskbar {
    fn name(&self) -> &'static str {
        "Windows Taskbar"
    }

    fn features(&self) -> FeatureSet {
        FeatureSet::ICON_BADGE_IMAGE_WINDOW
            | FeatureSet::PROGRESS_STATE_WINDOW
            | FeatureSet::PROGRESS_VALUE_WINDOW
            | FeatureSet::USER_ATTENTION_WINDOW
    }

    fn set_badge_text(&self, _text: &str) -> Result<(), TaskbarError> {
        Err(TaskbarError::Unsupported(Feature::IconBadgeText))
    }

    fn set_window_badge_image(
        &self,
        window: WindowHandle,
        image: &BadgeImage,
    ) -> Result<(), TaskbarError> {
        let hwnd = resolve_window(window)?;
        let icon = create_icon(image)?;
        let result = with_taskbar_list(|list| unsafe { list.SetOverlayIcon(hwnd, icon, w!("badge")) });
        unsafe {
            let _ = DestroyIcon(icon);
        }
        result
    }

    fn set_icon_image(&self, _image: &BadgeImage) -> Result<(), TaskbarError> {
        Err(TaskbarError::Unsupported(Feature::IconImage))
    }

    fn set_menu(&self, _menu: &TaskbarMenu) -> Result<(), TaskbarError> {
        Err(TaskbarError::Unsupported(Feature::Menu))
    }

    fn set_window_progress_state(
        &self,
        window: WindowHandle,
        state: ProgressState,
    ) -> Result<(), TaskbarError> {
        let hwnd = resolve_window(window)?;
        let flag = match state {
            ProgressState::Off => TBPF_NOPROGRESS,
            ProgressState::Normal => TBPF_NORMAL,
            ProgressState::Paused => TBPF_PAUSED,
            ProgressState::Error => TBPF_ERROR,
            ProgressState::Indeterminate => TBPF_INDETERMINATE,
        };
        with_taskbar_list(|list| unsafe { list.SetProgressState(hwnd, flag) })
    }

    fn set_progress_value(&self, _value: ProgressValue) -> Result<(), TaskbarError> {
        Err(TaskbarError::Unsupported(Feature::ProgressValue))
    }

    fn set_window_progress_value(
        &self,
        window: WindowHandle,
        value: ProgressValue,
    ) -> Result<(), TaskbarError> {
        let hwnd = resolve_window(window)?;
        with_taskbar_list(|list| unsafe {
            list.SetProgressValue(hwnd, u64::from(value.get()), 100)
        })
    }

    fn request_user_attention(&self, _enabled: bool, _critical: bool) -> Result<(), TaskbarError> {
        Err(TaskbarError::Unsupported(Feature::UserAttention))
    }

    fn request_window_user_attention(&self, window: WindowHandle) -> Result<(), TaskbarError> {
        let hwnd = resolve_window(window)?;
        let info = FLASHWINFO {
            cbSize: u32::try_from(std::mem::size_of::<FLASHWINFO>()).unwrap_or(0),
            hwnd,
            dwFlags: FLASHW_ALL | FLASHW_TIMERNOFG,
            uCount: 0,
            dwTimeout: 0,
        };
        unsafe {
            let _ = FlashWindowEx(&info);
        }
        Ok(())
    }
}

fn resolve_window(window: WindowHandle) -> Result<HWND, TaskbarError> {
    let hwnd = if window == WindowHandle::MAIN {
        unsafe { GetActiveWindow() }
    } else {
        HWND(window.raw() as usize as *mut core::ffi::c_void)
    };
    if hwnd.is_invalid() {
        return Err(TaskbarError::platform("no native window to target"));
    }
    Ok(hwnd)
}

fn with_taskbar_list(
    call: impl FnOnce(&ITaskbarList3) -> windows::core::Result<()>,
) -> Result<(), TaskbarError> {
    TASKBAR_LIST.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            unsafe {
                let _ = CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok();
            }
            let list: ITaskbarList3 =
                unsafe { CoCreateInstance(&TaskbarList, None, CLSCTX_INPROC_SERVER) }
                    .map_err(|error| TaskbarError::platform(error.to_string()))?;
            unsafe { list.HrInit() }.map_err(|error| TaskbarError::platform(error.to_string()))?;
            tracing::debug!("ITaskbarList3 initialized");
            *slot = Some(list);
        }
        let list = slot.as_ref().expect("taskbar list initialized above");
        call(list).map_err(|error| TaskbarError::platform(error.to_string()))
    })
}

/// Builds an `HICON` from the RGBA buffer. Pixels are converted to BGRA for
/// the 32bpp color bitmap; the monochrome mask is left empty because the
/// alpha channel drives transparency.
fn create_icon(image: &BadgeImage) -> Result<HICON, TaskbarError> {
    let width = i32::try_from(image.width())
        .map_err(|_| TaskbarError::platform("badge image too wide"))?;
    let height = i32::try_from(image.height())
        .map_err(|_| TaskbarError::platform("badge image too tall"))?;

    let mut bgra = image.pixels().to_vec();
    for pixel in bgra.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }

    unsafe {
        let color: HBITMAP = CreateBitmap(width, height, 1, 32, Some(bgra.as_ptr().cast()));
        let mask: HBITMAP = CreateBitmap(width, height, 1, 1, None);
        if color.is_invalid() || mask.is_invalid() {
            let _ = DeleteObject(color.into());
            let _ = DeleteObject(mask.into());
            return Err(TaskbarError::platform("failed to create badge bitmaps"));
        }

        let info = ICONINFO {
            fIcon: true.into(),
            xHotspot: 0,
            yHotspot: 0,
            hbmMask: mask,
            hbmColor: color,
        };
        let icon = CreateIconIndirect(&info);
        let _ = DeleteObject(color.into());
        let _ = DeleteObject(mask.into());
        icon.map_err(|error| TaskbarError::platform(error.to_string()))
    }
}
