use platform_io::{IoCause, OpenOutcome, SaveOutcome};

fn unsupported() -> IoCause {
    IoCause::unsupported("browser file io is only available when compiled for wasm32")
}

pub(crate) fn host_transport_present() -> bool {
    false
}

pub(crate) async fn host_open() -> OpenOutcome {
    OpenOutcome::Failed(unsupported())
}

pub(crate) async fn host_save(_data: &[u8]) -> SaveOutcome {
    SaveOutcome::Failed(unsupported())
}

pub(crate) async fn picker_open() -> OpenOutcome {
    OpenOutcome::Failed(unsupported())
}

pub(crate) async fn picker_save(_data: &[u8]) -> SaveOutcome {
    SaveOutcome::Failed(unsupported())
}
