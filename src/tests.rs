use std::cell::{Cell, RefCell};
use std::ffi::{c_char, c_void, CStr};
use std::ptr;
use std::time::Duration;

use sles::*;

use crate::*;

const fn test_iid(n: u32) -> SLInterfaceID_ {
    SLInterfaceID_ {
        time_low: n,
        time_mid: 0x1234,
        time_hi_and_version: 0x5678,
        clock_seq: 0x9abc,
        node: [0xde, 0xf0, 0x12, 0x34, 0x56, 0x78],
    }
}

static TEST_IID_PLAY: SLInterfaceID_ = test_iid(1);
static TEST_IID_VOLUME: SLInterfaceID_ = test_iid(2);
static TEST_IID_MISSING: SLInterfaceID_ = test_iid(3);

fn iid(iid: &'static SLInterfaceID_) -> SLInterfaceID {
    iid
}

#[repr(C)]
struct TestObject {
    vtable: *const SLObjectItf_,
    state: Cell<SLuint32>,
    priority: Cell<SLuint32>,
    destroyed: Cell<bool>,
    async_realize: Cell<SLboolean>,
    callback: Cell<(slObjectCallback, *mut c_void)>,
    loss_of_control: RefCell<Option<(Vec<SLInterfaceID>, SLboolean)>>,
    play: TestPlay,
    volume: TestVolume,
}

impl TestObject {
    fn new(vtable: &'static SLObjectItf_) -> Box<TestObject> {
        Box::new(TestObject {
            vtable,
            state: Cell::new(SL_OBJECT_STATE_UNREALIZED),
            priority: Cell::new(SL_PRIORITY_NORMAL),
            destroyed: Cell::new(false),
            async_realize: Cell::new(SL_BOOLEAN_FALSE),
            callback: Cell::new((None, ptr::null_mut())),
            loss_of_control: RefCell::new(None),
            play: TestPlay {
                vtable: &PLAY_VTABLE,
                state: Cell::new(SL_PLAYSTATE_STOPPED),
                duration: Cell::new(SL_TIME_UNKNOWN),
                marker: Cell::new(None),
                events: Cell::new(0),
                callback: Cell::new((None, ptr::null_mut())),
            },
            volume: TestVolume {
                vtable: &VOLUME_VTABLE,
                level: Cell::new(0),
                max_level: Cell::new(-600),
                stereo_calls: Cell::new(0),
            },
        })
    }

    fn object(&self) -> Object {
        unsafe { Itf::from_raw(&self.vtable as *const *const SLObjectItf_) }.unwrap()
    }
}

unsafe extern "C" fn realize(this: SLObjectItf, async_: SLboolean) -> SLresult {
    let object = &*(this as *const TestObject);
    object.async_realize.set(async_);
    object.state.set(SL_OBJECT_STATE_REALIZED);
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn resume(this: SLObjectItf, _async: SLboolean) -> SLresult {
    let object = &*(this as *const TestObject);
    if object.state.get() != SL_OBJECT_STATE_SUSPENDED {
        return SL_RESULT_PRECONDITIONS_VIOLATED;
    }
    object.state.set(SL_OBJECT_STATE_REALIZED);
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_state(this: SLObjectItf, state: *mut SLuint32) -> SLresult {
    let object = &*(this as *const TestObject);
    *state = object.state.get();
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_interface(
    this: SLObjectItf,
    iid: SLInterfaceID,
    interface: *mut c_void,
) -> SLresult {
    let object = &*(this as *const TestObject);

    let itf = if ptr::eq(iid, &TEST_IID_PLAY) {
        &object.play.vtable as *const _ as *const c_void
    } else if ptr::eq(iid, &TEST_IID_VOLUME) {
        &object.volume.vtable as *const _ as *const c_void
    } else {
        return SL_RESULT_FEATURE_UNSUPPORTED;
    };

    *(interface as *mut *const c_void) = itf;
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn register_object_callback(
    this: SLObjectItf,
    callback: slObjectCallback,
    context: *mut c_void,
) -> SLresult {
    let object = &*(this as *const TestObject);
    object.callback.set((callback, context));
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn set_loss_of_control_interfaces(
    this: SLObjectItf,
    count: SLuint16,
    iids: *const SLInterfaceID,
    enabled: SLboolean,
) -> SLresult {
    let object = &*(this as *const TestObject);
    let iids = std::slice::from_raw_parts(iids, count as usize).to_vec();
    *object.loss_of_control.borrow_mut() = Some((iids, enabled));
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn destroy(this: SLObjectItf) {
    let object = &*(this as *const TestObject);
    object.destroyed.set(true);
}

unsafe extern "C" fn set_priority(this: SLObjectItf, priority: SLuint32) -> SLresult {
    let object = &*(this as *const TestObject);
    object.priority.set(priority);
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_priority(this: SLObjectItf, priority: *mut SLuint32) -> SLresult {
    let object = &*(this as *const TestObject);
    *priority = object.priority.get();
    SL_RESULT_SUCCESS
}

static OBJECT_VTABLE: SLObjectItf_ = SLObjectItf_ {
    Realize: Some(realize),
    Resume: Some(resume),
    GetState: Some(get_state),
    GetInterface: Some(get_interface),
    RegisterCallback: Some(register_object_callback),
    AbortAsyncOperation: None,
    Destroy: Some(destroy),
    SetPriority: Some(set_priority),
    GetPriority: Some(get_priority),
    SetLossOfControlInterfaces: Some(set_loss_of_control_interfaces),
};

static EMPTY_OBJECT_VTABLE: SLObjectItf_ = SLObjectItf_ {
    Realize: None,
    Resume: None,
    GetState: None,
    GetInterface: None,
    RegisterCallback: None,
    AbortAsyncOperation: None,
    Destroy: None,
    SetPriority: None,
    GetPriority: None,
    SetLossOfControlInterfaces: None,
};

#[repr(C)]
struct TestPlay {
    vtable: *const SLPlayItf_,
    state: Cell<SLuint32>,
    duration: Cell<SLmillisecond>,
    marker: Cell<Option<SLmillisecond>>,
    events: Cell<SLuint32>,
    callback: Cell<(slPlayCallback, *mut c_void)>,
}

unsafe fn as_play<'a>(this: SLPlayItf) -> &'a TestPlay {
    &*(this as *const TestPlay)
}

unsafe extern "C" fn set_play_state(this: SLPlayItf, state: SLuint32) -> SLresult {
    if !(SL_PLAYSTATE_STOPPED..=SL_PLAYSTATE_PLAYING).contains(&state) {
        return SL_RESULT_PARAMETER_INVALID;
    }
    as_play(this).state.set(state);
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_play_state(this: SLPlayItf, state: *mut SLuint32) -> SLresult {
    *state = as_play(this).state.get();
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_duration(this: SLPlayItf, ms: *mut SLmillisecond) -> SLresult {
    *ms = as_play(this).duration.get();
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn set_marker_position(this: SLPlayItf, ms: SLmillisecond) -> SLresult {
    as_play(this).marker.set(Some(ms));
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn clear_marker_position(this: SLPlayItf) -> SLresult {
    as_play(this).marker.set(None);
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_marker_position(this: SLPlayItf, ms: *mut SLmillisecond) -> SLresult {
    match as_play(this).marker.get() {
        Some(marker) => {
            *ms = marker;
            SL_RESULT_SUCCESS
        }
        None => SL_RESULT_PRECONDITIONS_VIOLATED,
    }
}

unsafe extern "C" fn set_play_events(this: SLPlayItf, events: SLuint32) -> SLresult {
    as_play(this).events.set(events);
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_play_events(this: SLPlayItf, events: *mut SLuint32) -> SLresult {
    *events = as_play(this).events.get();
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn register_play_callback(
    this: SLPlayItf,
    callback: slPlayCallback,
    context: *mut c_void,
) -> SLresult {
    as_play(this).callback.set((callback, context));
    SL_RESULT_SUCCESS
}

static PLAY_VTABLE: SLPlayItf_ = SLPlayItf_ {
    SetPlayState: Some(set_play_state),
    GetPlayState: Some(get_play_state),
    GetDuration: Some(get_duration),
    GetPosition: None,
    RegisterCallback: Some(register_play_callback),
    SetCallbackEventsMask: Some(set_play_events),
    GetCallbackEventsMask: Some(get_play_events),
    SetMarkerPosition: Some(set_marker_position),
    ClearMarkerPosition: Some(clear_marker_position),
    GetMarkerPosition: Some(get_marker_position),
    SetPositionUpdatePeriod: None,
    GetPositionUpdatePeriod: None,
};

#[repr(C)]
struct TestVolume {
    vtable: *const SLVolumeItf_,
    level: Cell<SLmillibel>,
    max_level: Cell<SLmillibel>,
    stereo_calls: Cell<u32>,
}

unsafe fn as_volume<'a>(this: SLVolumeItf) -> &'a TestVolume {
    &*(this as *const TestVolume)
}

unsafe extern "C" fn set_volume_level(this: SLVolumeItf, level: SLmillibel) -> SLresult {
    let volume = as_volume(this);
    if level > volume.max_level.get() {
        return SL_RESULT_PARAMETER_INVALID;
    }
    volume.level.set(level);
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_volume_level(this: SLVolumeItf, level: *mut SLmillibel) -> SLresult {
    *level = as_volume(this).level.get();
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_max_volume_level(this: SLVolumeItf, level: *mut SLmillibel) -> SLresult {
    *level = as_volume(this).max_level.get();
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn set_stereo_position(this: SLVolumeItf, _position: SLpermille) -> SLresult {
    let volume = as_volume(this);
    volume.stereo_calls.set(volume.stereo_calls.get() + 1);
    SL_RESULT_SUCCESS
}

static VOLUME_VTABLE: SLVolumeItf_ = SLVolumeItf_ {
    SetVolumeLevel: Some(set_volume_level),
    GetVolumeLevel: Some(get_volume_level),
    GetMaxVolumeLevel: Some(get_max_volume_level),
    SetMute: None,
    GetMute: None,
    EnableStereoPosition: None,
    IsEnabledStereoPosition: None,
    SetStereoPosition: Some(set_stereo_position),
    GetStereoPosition: None,
};

#[repr(C)]
struct TestBufferQueue {
    vtable: *const SLBufferQueueItf_,
    queued: RefCell<Vec<(*const c_void, SLuint32, SLboolean)>>,
    processed: Cell<SLuint32>,
    events: Cell<SLuint32>,
    callback: Cell<(slBufferQueueCallback, *mut c_void)>,
}

unsafe fn as_buffer_queue<'a>(this: SLBufferQueueItf) -> &'a TestBufferQueue {
    &*(this as *const TestBufferQueue)
}

unsafe extern "C" fn enqueue(
    this: SLBufferQueueItf,
    buffer: *const c_void,
    size: SLuint32,
    is_last: SLboolean,
) -> SLresult {
    as_buffer_queue(this).queued.borrow_mut().push((buffer, size, is_last));
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn clear(this: SLBufferQueueItf) -> SLresult {
    as_buffer_queue(this).queued.borrow_mut().clear();
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_buffer_queue_state(
    this: SLBufferQueueItf,
    state: *mut SLBufferQueueState,
) -> SLresult {
    let queue = as_buffer_queue(this);
    *state = SLBufferQueueState {
        count: queue.queued.borrow().len() as SLuint32,
        index: queue.processed.get(),
    };
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn register_buffer_queue_callback(
    this: SLBufferQueueItf,
    callback: slBufferQueueCallback,
    context: *mut c_void,
) -> SLresult {
    as_buffer_queue(this).callback.set((callback, context));
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn set_buffer_queue_events(this: SLBufferQueueItf, events: SLuint32) -> SLresult {
    as_buffer_queue(this).events.set(events);
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_buffer_queue_events(
    this: SLBufferQueueItf,
    events: *mut SLuint32,
) -> SLresult {
    *events = as_buffer_queue(this).events.get();
    SL_RESULT_SUCCESS
}

static BUFFER_QUEUE_VTABLE: SLBufferQueueItf_ = SLBufferQueueItf_ {
    Enqueue: Some(enqueue),
    Clear: Some(clear),
    GetState: Some(get_buffer_queue_state),
    RegisterCallback: Some(register_buffer_queue_callback),
    SetCallbackEventsMask: Some(set_buffer_queue_events),
    GetCallbackEventsMask: Some(get_buffer_queue_events),
};

#[repr(C)]
struct TestRecord {
    vtable: *const SLRecordItf_,
    state: Cell<SLuint32>,
    limit: Cell<SLmillisecond>,
    callback: Cell<(slRecordCallback, *mut c_void)>,
}

unsafe fn as_record<'a>(this: SLRecordItf) -> &'a TestRecord {
    &*(this as *const TestRecord)
}

unsafe extern "C" fn set_record_state(this: SLRecordItf, state: SLuint32) -> SLresult {
    as_record(this).state.set(state);
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_record_state(this: SLRecordItf, state: *mut SLuint32) -> SLresult {
    *state = as_record(this).state.get();
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn set_duration_limit(this: SLRecordItf, ms: SLmillisecond) -> SLresult {
    as_record(this).limit.set(ms);
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn get_record_marker(_this: SLRecordItf, _ms: *mut SLmillisecond) -> SLresult {
    SL_RESULT_PRECONDITIONS_VIOLATED
}

unsafe extern "C" fn register_record_callback(
    this: SLRecordItf,
    callback: slRecordCallback,
    context: *mut c_void,
) -> SLresult {
    as_record(this).callback.set((callback, context));
    SL_RESULT_SUCCESS
}

static RECORD_VTABLE: SLRecordItf_ = SLRecordItf_ {
    SetRecordState: Some(set_record_state),
    GetRecordState: Some(get_record_state),
    SetDurationLimit: Some(set_duration_limit),
    GetPosition: None,
    RegisterCallback: Some(register_record_callback),
    SetCallbackEventsMask: None,
    GetCallbackEventsMask: None,
    SetMarkerPosition: None,
    ClearMarkerPosition: None,
    GetMarkerPosition: Some(get_record_marker),
    SetPositionUpdatePeriod: None,
    GetPositionUpdatePeriod: None,
};

const EXTENSIONS: [&[u8]; 2] = [b"TEST_extension_one", b"TEST_two"];

#[repr(C)]
struct TestEngine {
    vtable: *const SLEngineItf_,
    mix: Box<TestObject>,
    player: Box<TestObject>,
    recorder: Box<TestObject>,
    data: Cell<(*const SLDataSource, *const SLDataSink)>,
    requested: RefCell<Vec<(SLInterfaceID, SLboolean)>>,
}

impl TestEngine {
    fn new() -> Box<TestEngine> {
        Box::new(TestEngine {
            vtable: &ENGINE_VTABLE,
            mix: TestObject::new(&OBJECT_VTABLE),
            player: TestObject::new(&OBJECT_VTABLE),
            recorder: TestObject::new(&OBJECT_VTABLE),
            data: Cell::new((ptr::null(), ptr::null())),
            requested: RefCell::new(Vec::new()),
        })
    }

    fn engine(&self) -> Engine {
        unsafe { Itf::from_raw(&self.vtable as *const *const SLEngineItf_) }.unwrap()
    }
}

unsafe fn create_object(
    engine: &TestEngine,
    object: &TestObject,
    out: *mut SLObjectItf,
    num_interfaces: SLuint32,
    interface_ids: *const SLInterfaceID,
    interface_required: *const SLboolean,
) -> SLresult {
    let mut requested = engine.requested.borrow_mut();
    requested.clear();
    for i in 0..num_interfaces as usize {
        let iid = *interface_ids.add(i);
        let required = *interface_required.add(i);
        if required != SL_BOOLEAN_FALSE && ptr::eq(iid, &TEST_IID_MISSING) {
            return SL_RESULT_FEATURE_UNSUPPORTED;
        }
        requested.push((iid, required));
    }

    *out = object.object().as_raw();
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn create_output_mix(
    this: SLEngineItf,
    mix: *mut SLObjectItf,
    num_interfaces: SLuint32,
    interface_ids: *const SLInterfaceID,
    interface_required: *const SLboolean,
) -> SLresult {
    let engine = &*(this as *const TestEngine);
    create_object(engine, &engine.mix, mix, num_interfaces, interface_ids, interface_required)
}

unsafe extern "C" fn create_audio_player(
    this: SLEngineItf,
    player: *mut SLObjectItf,
    source: *const SLDataSource,
    sink: *const SLDataSink,
    num_interfaces: SLuint32,
    interface_ids: *const SLInterfaceID,
    interface_required: *const SLboolean,
) -> SLresult {
    let engine = &*(this as *const TestEngine);
    engine.data.set((source, sink));
    create_object(engine, &engine.player, player, num_interfaces, interface_ids, interface_required)
}

unsafe extern "C" fn create_audio_recorder(
    this: SLEngineItf,
    recorder: *mut SLObjectItf,
    source: *const SLDataSource,
    sink: *const SLDataSink,
    num_interfaces: SLuint32,
    interface_ids: *const SLInterfaceID,
    interface_required: *const SLboolean,
) -> SLresult {
    let engine = &*(this as *const TestEngine);
    engine.data.set((source, sink));
    create_object(
        engine,
        &engine.recorder,
        recorder,
        num_interfaces,
        interface_ids,
        interface_required,
    )
}

/// Reports success without producing an object.
unsafe extern "C" fn create_listener(
    _this: SLEngineItf,
    listener: *mut SLObjectItf,
    _num_interfaces: SLuint32,
    _interface_ids: *const SLInterfaceID,
    _interface_required: *const SLboolean,
) -> SLresult {
    *listener = ptr::null();
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn query_num_supported_interfaces(
    _this: SLEngineItf,
    object_id: SLuint32,
    count: *mut SLuint32,
) -> SLresult {
    if object_id != SL_OBJECTID_OUTPUTMIX {
        return SL_RESULT_FEATURE_UNSUPPORTED;
    }
    *count = 2;
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn query_supported_interfaces(
    _this: SLEngineItf,
    _object_id: SLuint32,
    index: SLuint32,
    interface_id: *mut SLInterfaceID,
) -> SLresult {
    *interface_id = match index {
        0 => &TEST_IID_PLAY,
        1 => &TEST_IID_VOLUME,
        _ => return SL_RESULT_PARAMETER_INVALID,
    };
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn query_num_supported_extensions(
    _this: SLEngineItf,
    count: *mut SLuint32,
) -> SLresult {
    *count = EXTENSIONS.len() as SLuint32;
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn query_supported_extension(
    _this: SLEngineItf,
    index: SLuint32,
    name: *mut SLchar,
    len: *mut SLuint16,
) -> SLresult {
    let Some(extension) = EXTENSIONS.get(index as usize) else {
        return SL_RESULT_PARAMETER_INVALID;
    };

    if name.is_null() {
        *len = extension.len() as SLuint16;
        return SL_RESULT_SUCCESS;
    }

    if (*len as usize) < extension.len() {
        return SL_RESULT_BUFFER_INSUFFICIENT;
    }
    ptr::copy_nonoverlapping(extension.as_ptr(), name, extension.len());
    if (*len as usize) > extension.len() {
        *name.add(extension.len()) = 0;
    }
    *len = extension.len() as SLuint16;
    SL_RESULT_SUCCESS
}

unsafe extern "C" fn is_extension_supported(
    _this: SLEngineItf,
    name: *const SLchar,
    supported: *mut SLboolean,
) -> SLresult {
    let name = CStr::from_ptr(name as *const c_char).to_bytes();
    *supported = EXTENSIONS.iter().any(|&extension| extension == name) as SLboolean;
    SL_RESULT_SUCCESS
}

static ENGINE_VTABLE: SLEngineItf_ = SLEngineItf_ {
    CreateLEDDevice: None,
    CreateVibraDevice: None,
    CreateAudioPlayer: Some(create_audio_player),
    CreateAudioRecorder: Some(create_audio_recorder),
    CreateMidiPlayer: None,
    CreateListener: Some(create_listener),
    Create3DGroup: None,
    CreateOutputMix: Some(create_output_mix),
    CreateMetadataExtractor: None,
    CreateExtensionObject: None,
    QueryNumSupportedInterfaces: Some(query_num_supported_interfaces),
    QuerySupportedInterfaces: Some(query_supported_interfaces),
    QueryNumSupportedExtensions: Some(query_num_supported_extensions),
    QuerySupportedExtension: Some(query_supported_extension),
    IsExtensionSupported: Some(is_extension_supported),
};

unsafe extern "C" fn collect_object_event(
    _caller: SLObjectItf,
    context: *const c_void,
    event: SLuint32,
    _result: SLresult,
    _param: SLuint32,
    _interface: *mut c_void,
) {
    let events = &*(context as *const Cell<SLuint32>);
    events.set(events.get() | event);
}

unsafe extern "C" fn collect_play_event(_caller: SLPlayItf, context: *mut c_void, event: SLuint32) {
    let events = &*(context as *const Cell<SLuint32>);
    events.set(events.get() | event);
}

unsafe extern "C" fn collect_record_event(
    _caller: SLRecordItf,
    context: *mut c_void,
    event: SLuint32,
) {
    let events = &*(context as *const Cell<SLuint32>);
    events.set(events.get() | event);
}

unsafe extern "C" fn collect_buffer_event(
    _caller: SLBufferQueueItf,
    event: SLuint32,
    _buffer: *const c_void,
    _size: SLuint32,
    _used: SLuint32,
    context: *mut c_void,
) {
    let events = &*(context as *const Cell<SLuint32>);
    events.set(events.get() | event);
}

fn context<T>(value: &T) -> *mut c_void {
    value as *const T as *mut c_void
}

#[test]
fn result_codes() {
    assert_eq!(Error::from_raw(SL_RESULT_SUCCESS), None);
    assert!(check(SL_RESULT_SUCCESS).is_ok());

    for code in SL_RESULT_PRECONDITIONS_VIOLATED..=SL_RESULT_SOURCE_SINK_INCOMPATIBLE {
        let error = Error::from_raw(code).unwrap();
        assert!(!matches!(error, Error::Unrecognized(_)));
        assert_eq!(error.code(), code);
        assert_eq!(check(code), Err(error));
    }

    assert_eq!(Error::from_raw(0x80001234), Some(Error::Unrecognized(0x80001234)));
    assert_eq!(Error::Unrecognized(0x80001234).code(), 0x80001234);
    assert_eq!(Error::MissingMethod("Realize").code(), SL_RESULT_FEATURE_UNSUPPORTED);
    assert_eq!(Error::InvalidArgument("x").code(), SL_RESULT_PARAMETER_INVALID);
}

#[test]
fn null_interface() {
    assert!(unsafe { Itf::<SLObjectItf_>::from_raw(ptr::null()) }.is_none());
}

#[test]
fn missing_method() {
    let object = TestObject::new(&EMPTY_OBJECT_VTABLE);
    let object = object.object();

    assert_eq!(object.realize(), Err(Error::MissingMethod("Realize")));
    assert_eq!(object.state(), Err(Error::MissingMethod("GetState")));
    assert_eq!(object.abort_async_operation(), Err(Error::MissingMethod("AbortAsyncOperation")));
}

#[test]
fn object_lifecycle() {
    let test_object = TestObject::new(&OBJECT_VTABLE);
    let object = test_object.object();

    assert_eq!(object.state(), Ok(ObjectState::Unrealized));
    object.realize().unwrap();
    assert_eq!(object.state(), Ok(ObjectState::Realized));

    object.set_priority(SL_PRIORITY_HIGH).unwrap();
    assert_eq!(object.priority(), Ok(SL_PRIORITY_HIGH));

    test_object.state.set(0x42);
    assert_eq!(object.state(), Err(Error::UnexpectedValue(0x42, "object state")));

    unsafe { object.destroy() }.unwrap();
    assert!(test_object.destroyed.get());
}

#[test]
fn object_realize_async_and_resume() {
    let test_object = TestObject::new(&OBJECT_VTABLE);
    let object = test_object.object();

    object.realize_async().unwrap();
    assert_eq!(test_object.async_realize.get(), SL_BOOLEAN_TRUE);
    object.realize().unwrap();
    assert_eq!(test_object.async_realize.get(), SL_BOOLEAN_FALSE);

    assert_eq!(object.resume(), Err(Error::PreconditionsViolated));
    test_object.state.set(SL_OBJECT_STATE_SUSPENDED);
    assert_eq!(object.state(), Ok(ObjectState::Suspended));
    object.resume().unwrap();
    assert_eq!(object.state(), Ok(ObjectState::Realized));
}

#[test]
fn object_callback() {
    let test_object = TestObject::new(&OBJECT_VTABLE);
    let object = test_object.object();

    let events = Cell::new(0);
    unsafe { object.register_callback(Some(collect_object_event), context(&events)) }.unwrap();

    let (callback, registered) = test_object.callback.get();
    assert_eq!(registered, context(&events));
    unsafe {
        callback.unwrap()(
            object.as_raw(),
            registered,
            SL_OBJECT_EVENT_ASYNC_TERMINATION,
            SL_RESULT_SUCCESS,
            0,
            ptr::null_mut(),
        );
    }
    assert_eq!(events.get(), SL_OBJECT_EVENT_ASYNC_TERMINATION);
}

#[test]
fn loss_of_control_interfaces() {
    let test_object = TestObject::new(&OBJECT_VTABLE);
    let object = test_object.object();

    let iids = [iid(&TEST_IID_PLAY), iid(&TEST_IID_VOLUME)];
    object.set_loss_of_control_interfaces(&iids, true).unwrap();
    assert_eq!(
        *test_object.loss_of_control.borrow(),
        Some((iids.to_vec(), SL_BOOLEAN_TRUE))
    );

    let too_many = vec![iid(&TEST_IID_PLAY); SLuint16::MAX as usize + 1];
    assert!(matches!(
        object.set_loss_of_control_interfaces(&too_many, false),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(
        *test_object.loss_of_control.borrow(),
        Some((iids.to_vec(), SL_BOOLEAN_TRUE))
    );
}

#[test]
fn object_interfaces() {
    let test_object = TestObject::new(&OBJECT_VTABLE);
    let object = test_object.object();

    let play: Play = unsafe { object.interface_by_id(iid(&TEST_IID_PLAY)) }.unwrap();
    assert_eq!(play.as_raw() as *const TestPlay, &test_object.play as *const TestPlay);

    let missing: Result<Volume> = unsafe { object.interface_by_id(iid(&TEST_IID_MISSING)) };
    assert_eq!(missing, Err(Error::FeatureUnsupported));
}

#[test]
fn play() {
    let test_object = TestObject::new(&OBJECT_VTABLE);
    let play: Play = unsafe { test_object.object().interface_by_id(iid(&TEST_IID_PLAY)) }.unwrap();

    assert_eq!(play.state(), Ok(PlayState::Stopped));
    play.set_state(PlayState::Playing).unwrap();
    assert_eq!(play.state(), Ok(PlayState::Playing));
    assert_eq!(test_object.play.state.get(), SL_PLAYSTATE_PLAYING);

    assert_eq!(play.duration(), Ok(None));
    test_object.play.duration.set(1500);
    assert_eq!(play.duration(), Ok(Some(Duration::from_millis(1500))));

    assert_eq!(play.position(), Err(Error::MissingMethod("GetPosition")));
}

#[test]
fn play_callback() {
    let test_object = TestObject::new(&OBJECT_VTABLE);
    let play: Play = unsafe { test_object.object().interface_by_id(iid(&TEST_IID_PLAY)) }.unwrap();

    let events = Cell::new(0);
    unsafe { play.register_callback(Some(collect_play_event), context(&events)) }.unwrap();

    let (callback, registered) = test_object.play.callback.get();
    assert_eq!(registered, context(&events));
    unsafe { callback.unwrap()(play.as_raw(), registered, SL_PLAYEVENT_HEADATEND) };
    assert_eq!(events.get(), SL_PLAYEVENT_HEADATEND);
}

#[test]
fn play_marker() {
    let test_object = TestObject::new(&OBJECT_VTABLE);
    let play: Play = unsafe { test_object.object().interface_by_id(iid(&TEST_IID_PLAY)) }.unwrap();

    assert_eq!(play.marker(), Ok(None));
    play.set_marker(Duration::from_millis(250)).unwrap();
    assert_eq!(play.marker(), Ok(Some(Duration::from_millis(250))));
    play.clear_marker().unwrap();
    assert_eq!(play.marker(), Ok(None));

    let too_long = Duration::from_millis(SL_TIME_UNKNOWN as u64);
    assert!(matches!(play.set_marker(too_long), Err(Error::InvalidArgument(_))));
    assert_eq!(test_object.play.marker.get(), None);
}

#[test]
fn play_events() {
    let test_object = TestObject::new(&OBJECT_VTABLE);
    let play: Play = unsafe { test_object.object().interface_by_id(iid(&TEST_IID_PLAY)) }.unwrap();

    play.set_event_mask(PlayEvents::HEAD_AT_END | PlayEvents::HEAD_AT_MARKER).unwrap();
    assert_eq!(test_object.play.events.get(), SL_PLAYEVENT_HEADATEND | SL_PLAYEVENT_HEADATMARKER);

    test_object.play.events.set(SL_PLAYEVENT_HEADSTALLED | 0x8000_0000);
    assert_eq!(play.event_mask(), Ok(PlayEvents::HEAD_STALLED));
}

#[test]
fn volume() {
    let test_object = TestObject::new(&OBJECT_VTABLE);
    let volume: Volume =
        unsafe { test_object.object().interface_by_id(iid(&TEST_IID_VOLUME)) }.unwrap();

    volume.set_level(-1200).unwrap();
    assert_eq!(volume.level(), Ok(-1200));
    assert_eq!(volume.set_level(0), Err(Error::ParameterInvalid));

    volume.set_gain(1.0).unwrap();
    assert_eq!(volume.level(), Ok(-600));

    volume.set_gain(0.0).unwrap();
    assert_eq!(volume.level(), Ok(SL_MILLIBEL_MIN));
    assert_eq!(volume.gain(), Ok(0.0));

    assert!(matches!(volume.set_stereo_position(1001), Err(Error::InvalidArgument(_))));
    assert_eq!(test_object.volume.stereo_calls.get(), 0);
    volume.set_stereo_position(-1000).unwrap();
    assert_eq!(test_object.volume.stereo_calls.get(), 1);

    assert_eq!(volume.set_mute(true), Err(Error::MissingMethod("SetMute")));
}

#[test]
fn record() {
    let test_record = Box::new(TestRecord {
        vtable: &RECORD_VTABLE,
        state: Cell::new(SL_RECORDSTATE_STOPPED),
        limit: Cell::new(0),
        callback: Cell::new((None, ptr::null_mut())),
    });
    let record: Record =
        unsafe { Itf::from_raw(&test_record.vtable as *const *const SLRecordItf_) }.unwrap();

    record.set_state(RecordState::Recording).unwrap();
    assert_eq!(record.state(), Ok(RecordState::Recording));

    record.set_duration_limit(Duration::from_secs(2)).unwrap();
    assert_eq!(test_record.limit.get(), 2000);

    assert_eq!(record.marker(), Ok(None));
    assert_eq!(record.event_mask(), Err(Error::MissingMethod("GetCallbackEventsMask")));

    let events = Cell::new(0);
    unsafe { record.register_callback(Some(collect_record_event), context(&events)) }.unwrap();
    let (callback, registered) = test_record.callback.get();
    unsafe { callback.unwrap()(record.as_raw(), registered, SL_RECORDEVENT_HEADATLIMIT) };
    assert_eq!(events.get(), SL_RECORDEVENT_HEADATLIMIT);

    test_record.state.set(0);
    assert_eq!(record.state(), Err(Error::UnexpectedValue(0, "record state")));
}

#[test]
fn buffer_queue() {
    let test_queue = Box::new(TestBufferQueue {
        vtable: &BUFFER_QUEUE_VTABLE,
        queued: RefCell::new(Vec::new()),
        processed: Cell::new(3),
        events: Cell::new(0),
        callback: Cell::new((None, ptr::null_mut())),
    });
    let queue: BufferQueue =
        unsafe { Itf::from_raw(&test_queue.vtable as *const *const SLBufferQueueItf_) }.unwrap();

    let first = [0u8; 64];
    let second = [0u8; 32];
    unsafe {
        queue.enqueue(&first, false).unwrap();
        queue.enqueue(&second, true).unwrap();
    }

    assert_eq!(
        *test_queue.queued.borrow(),
        vec![
            (first.as_ptr() as *const c_void, 64, SL_BOOLEAN_FALSE),
            (second.as_ptr() as *const c_void, 32, SL_BOOLEAN_TRUE),
        ]
    );
    assert_eq!(queue.state(), Ok(SLBufferQueueState { count: 2, index: 3 }));

    queue.clear().unwrap();
    assert_eq!(queue.state(), Ok(SLBufferQueueState { count: 0, index: 3 }));
}

#[test]
fn buffer_queue_events() {
    let test_queue = Box::new(TestBufferQueue {
        vtable: &BUFFER_QUEUE_VTABLE,
        queued: RefCell::new(Vec::new()),
        processed: Cell::new(0),
        events: Cell::new(0),
        callback: Cell::new((None, ptr::null_mut())),
    });
    let queue: BufferQueue =
        unsafe { Itf::from_raw(&test_queue.vtable as *const *const SLBufferQueueItf_) }.unwrap();

    queue
        .set_event_mask(BufferQueueEvents::PROCESSED | BufferQueueEvents::CONTENT_END)
        .unwrap();
    assert_eq!(
        test_queue.events.get(),
        SL_BUFFERQUEUEEVENT_PROCESSED | SL_BUFFERQUEUEEVENT_CONTENT_END
    );

    test_queue.events.set(SL_BUFFERQUEUEEVENT_STOPPED | 0x4000_0000);
    assert_eq!(queue.event_mask(), Ok(BufferQueueEvents::STOPPED));

    let events = Cell::new(0);
    unsafe { queue.register_callback(Some(collect_buffer_event), context(&events)) }.unwrap();
    let (callback, registered) = test_queue.callback.get();
    assert_eq!(registered, context(&events));
    unsafe {
        callback.unwrap()(
            queue.as_raw(),
            SL_BUFFERQUEUEEVENT_PROCESSED,
            ptr::null(),
            0,
            0,
            registered,
        );
    }
    assert_eq!(events.get(), SL_BUFFERQUEUEEVENT_PROCESSED);
}

#[test]
fn interface_request() {
    let request = InterfaceRequest::new();
    assert!(request.is_empty());

    let request = request
        .with_id(iid(&TEST_IID_VOLUME), true)
        .with_id(iid(&TEST_IID_PLAY), false);
    assert_eq!(request.len(), 2);
    assert_eq!(request.ids(), &[iid(&TEST_IID_VOLUME), iid(&TEST_IID_PLAY)]);
    assert_eq!(request.required(), &[SL_BOOLEAN_TRUE, SL_BOOLEAN_FALSE]);
}

#[test]
fn engine_options() {
    let options = EngineOptions::new().thread_safe(true).version(1, 1, 0);

    assert_eq!(
        options.as_slice(),
        &[
            SLEngineOption { feature: SL_ENGINEOPTION_THREADSAFE, data: SL_BOOLEAN_TRUE },
            SLEngineOption { feature: SL_ENGINEOPTION_MAJORVERSION, data: 1 },
            SLEngineOption { feature: SL_ENGINEOPTION_MINORVERSION, data: 1 },
            SLEngineOption { feature: SL_ENGINEOPTION_STEPVERSION, data: 0 },
        ]
    );
}

#[test]
fn engine_create_output_mix() {
    let test_engine = TestEngine::new();
    let engine = test_engine.engine();

    let mix = engine.create_output_mix(&InterfaceRequest::new()).unwrap();
    assert!(test_engine.requested.borrow().is_empty());
    mix.realize().unwrap();
    assert_eq!(test_engine.mix.state.get(), SL_OBJECT_STATE_REALIZED);

    let request = InterfaceRequest::new()
        .with_id(iid(&TEST_IID_VOLUME), true)
        .with_id(iid(&TEST_IID_PLAY), false);
    engine.create_output_mix(&request).unwrap();
    assert_eq!(
        *test_engine.requested.borrow(),
        vec![
            (iid(&TEST_IID_VOLUME), SL_BOOLEAN_TRUE),
            (iid(&TEST_IID_PLAY), SL_BOOLEAN_FALSE),
        ]
    );

    let request = InterfaceRequest::new().with_id(iid(&TEST_IID_MISSING), true);
    assert_eq!(engine.create_output_mix(&request), Err(Error::FeatureUnsupported));

    assert_eq!(
        engine.create_3d_group(&InterfaceRequest::new()),
        Err(Error::MissingMethod("Create3DGroup"))
    );
}

#[test]
fn engine_create_audio_player() {
    let test_engine = TestEngine::new();
    let engine = test_engine.engine();

    let mut locator = SLDataLocator_BufferQueue {
        locatorType: SL_DATALOCATOR_BUFFERQUEUE,
        numBuffers: 2,
    };
    let mut format = PcmFormat::new(Speakers::STEREO, 48000, SampleFormat::F32)
        .to_pcm_ex()
        .unwrap();
    let source = SLDataSource {
        pLocator: &mut locator as *mut SLDataLocator_BufferQueue as *mut c_void,
        pFormat: &mut format as *mut SLDataFormat_PCM_EX as *mut c_void,
    };
    let mut output = SLDataLocator_OutputMix {
        locatorType: SL_DATALOCATOR_OUTPUTMIX,
        outputMix: test_engine.mix.object().as_raw(),
    };
    let sink = SLDataSink {
        pLocator: &mut output as *mut SLDataLocator_OutputMix as *mut c_void,
        pFormat: ptr::null_mut(),
    };

    let request = InterfaceRequest::new()
        .with_id(iid(&TEST_IID_PLAY), true)
        .with_id(iid(&TEST_IID_VOLUME), false);
    let player = unsafe { engine.create_audio_player(&source, &sink, &request) }.unwrap();

    assert_eq!(player, test_engine.player.object());
    assert_eq!(
        test_engine.data.get(),
        (&source as *const SLDataSource, &sink as *const SLDataSink)
    );
    assert_eq!(
        *test_engine.requested.borrow(),
        vec![
            (iid(&TEST_IID_PLAY), SL_BOOLEAN_TRUE),
            (iid(&TEST_IID_VOLUME), SL_BOOLEAN_FALSE),
        ]
    );

    player.realize().unwrap();
    let play: Play = unsafe { player.interface_by_id(iid(&TEST_IID_PLAY)) }.unwrap();
    play.set_state(PlayState::Playing).unwrap();
    assert_eq!(test_engine.player.play.state.get(), SL_PLAYSTATE_PLAYING);
}

#[test]
fn engine_create_audio_recorder() {
    let test_engine = TestEngine::new();
    let engine = test_engine.engine();

    let source = SLDataSource {
        pLocator: ptr::null_mut(),
        pFormat: ptr::null_mut(),
    };
    let sink = SLDataSink {
        pLocator: ptr::null_mut(),
        pFormat: ptr::null_mut(),
    };
    let recorder =
        unsafe { engine.create_audio_recorder(&source, &sink, &InterfaceRequest::new()) }.unwrap();

    assert_eq!(recorder, test_engine.recorder.object());
    assert_eq!(
        test_engine.data.get(),
        (&source as *const SLDataSource, &sink as *const SLDataSink)
    );
    assert!(test_engine.requested.borrow().is_empty());
}

#[test]
fn null_object_on_success() {
    let test_engine = TestEngine::new();
    let engine = test_engine.engine();

    assert_eq!(
        engine.create_listener(&InterfaceRequest::new()),
        Err(Error::InternalError)
    );
}

#[test]
fn engine_queries() {
    let test_engine = TestEngine::new();
    let engine = test_engine.engine();

    assert_eq!(
        engine.supported_interfaces(SL_OBJECTID_OUTPUTMIX),
        Ok(vec![iid(&TEST_IID_PLAY), iid(&TEST_IID_VOLUME)])
    );
    assert_eq!(
        engine.supported_interfaces(SL_OBJECTID_LISTENER),
        Err(Error::FeatureUnsupported)
    );

    assert_eq!(
        engine.extensions(),
        Ok(vec!["TEST_extension_one".to_string(), "TEST_two".to_string()])
    );
    assert_eq!(engine.is_extension_supported("TEST_two"), Ok(true));
    assert_eq!(engine.is_extension_supported("TEST_three"), Ok(false));
    assert!(matches!(
        engine.is_extension_supported("TEST\0two"),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn speakers() {
    assert_eq!(Speakers::MONO.channels(), 1);
    assert_eq!(Speakers::STEREO.channels(), 2);
    assert_eq!(Speakers::SURROUND_5_1.channels(), 6);
    assert_eq!(Speakers::SURROUND_7_1.channels(), 8);
    assert_eq!(Speakers::STEREO.bits(), SL_SPEAKER_FRONT_LEFT | SL_SPEAKER_FRONT_RIGHT);

    for channels in [1, 2, 4, 6, 8] {
        assert_eq!(Speakers::for_channels(channels).unwrap().channels(), channels);
    }
    assert_eq!(Speakers::for_channels(3), None);
}

#[test]
fn pcm_format() {
    let format = PcmFormat::new(Speakers::STEREO, 48000, SampleFormat::I16);
    assert_eq!(format.frame_size(), 4);

    let pcm = format.to_pcm().unwrap();
    assert_eq!(pcm.formatType, SL_DATAFORMAT_PCM);
    assert_eq!(pcm.numChannels, 2);
    assert_eq!(pcm.samplesPerSec, SL_SAMPLINGRATE_48);
    assert_eq!(pcm.bitsPerSample, SL_PCMSAMPLEFORMAT_FIXED_16);
    assert_eq!(pcm.containerSize, SL_PCMSAMPLEFORMAT_FIXED_16);
    assert_eq!(pcm.channelMask, SL_SPEAKER_FRONT_LEFT | SL_SPEAKER_FRONT_RIGHT);
    assert_eq!(pcm.endianness, SL_BYTEORDER_NATIVE);

    let float = PcmFormat::new(Speakers::MONO, 44100, SampleFormat::F32);
    assert!(matches!(float.to_pcm(), Err(Error::InvalidArgument(_))));

    let pcm_ex = float.to_pcm_ex().unwrap();
    assert_eq!(pcm_ex.formatType, SL_DATAFORMAT_PCM_EX);
    assert_eq!(pcm_ex.sampleRate, SL_SAMPLINGRATE_44_1);
    assert_eq!(pcm_ex.bitsPerSample, 32);
    assert_eq!(pcm_ex.representation, SL_PCM_REPRESENTATION_FLOAT);

    let empty = PcmFormat::new(Speakers::empty(), 48000, SampleFormat::I16);
    assert!(matches!(empty.to_pcm_ex(), Err(Error::InvalidArgument(_))));

    let too_fast = PcmFormat::new(Speakers::STEREO, u32::MAX, SampleFormat::I16);
    assert!(matches!(too_fast.to_pcm(), Err(Error::InvalidArgument(_))));
}

#[cfg(any(target_os = "android", feature = "android"))]
#[test]
fn android_pcm_format() {
    let format = PcmFormat::new(Speakers::STEREO, 48000, SampleFormat::F32);
    let android = format.to_android_pcm_ex().unwrap();

    assert_eq!(android.formatType, SL_ANDROID_DATAFORMAT_PCM_EX);
    assert_eq!(android.sampleRate, SL_SAMPLINGRATE_48);
    assert_eq!(android.representation, SL_ANDROID_PCM_REPRESENTATION_FLOAT);
}

#[test]
fn millihertz_conversion() {
    assert_eq!(millihertz(44100), Ok(SL_SAMPLINGRATE_44_1));
    assert!(millihertz(u32::MAX / 1000 + 1).is_err());
}

#[test]
fn gain_conversion() {
    assert_eq!(millibel_from_gain(1.0), 0);
    assert_eq!(millibel_from_gain(0.1), -2000);
    assert_eq!(millibel_from_gain(10.0), 2000);
    assert_eq!(millibel_from_gain(0.0), SL_MILLIBEL_MIN);
    assert_eq!(millibel_from_gain(-1.0), SL_MILLIBEL_MIN);
    assert_eq!(millibel_from_gain(f32::NAN), SL_MILLIBEL_MIN);
    assert_eq!(millibel_from_gain(f32::INFINITY), SL_MILLIBEL_MAX);
    assert_eq!(millibel_from_gain(1e-30), SL_MILLIBEL_MIN);

    assert_eq!(gain_from_millibel(SL_MILLIBEL_MIN), 0.0);
    assert_eq!(gain_from_millibel(0), 1.0);
    assert!((gain_from_millibel(-2000) - 0.1).abs() < 1e-6);
}

#[cfg(any(target_os = "android", feature = "android"))]
mod android_extensions {
    use super::*;

    #[repr(C)]
    struct TestSimpleBufferQueue {
        vtable: *const SLAndroidSimpleBufferQueueItf_,
        queued: RefCell<Vec<(*const c_void, SLuint32)>>,
        callback: Cell<(slAndroidSimpleBufferQueueCallback, *mut c_void)>,
    }

    unsafe fn as_queue<'a>(this: SLAndroidSimpleBufferQueueItf) -> &'a TestSimpleBufferQueue {
        &*(this as *const TestSimpleBufferQueue)
    }

    unsafe extern "C" fn enqueue(
        this: SLAndroidSimpleBufferQueueItf,
        buffer: *const c_void,
        size: SLuint32,
    ) -> SLresult {
        as_queue(this).queued.borrow_mut().push((buffer, size));
        SL_RESULT_SUCCESS
    }

    unsafe extern "C" fn clear(this: SLAndroidSimpleBufferQueueItf) -> SLresult {
        as_queue(this).queued.borrow_mut().clear();
        SL_RESULT_SUCCESS
    }

    unsafe extern "C" fn get_state(
        this: SLAndroidSimpleBufferQueueItf,
        state: *mut SLAndroidSimpleBufferQueueState,
    ) -> SLresult {
        *state = SLAndroidSimpleBufferQueueState {
            count: as_queue(this).queued.borrow().len() as SLuint32,
            index: 0,
        };
        SL_RESULT_SUCCESS
    }

    unsafe extern "C" fn register_callback(
        this: SLAndroidSimpleBufferQueueItf,
        callback: slAndroidSimpleBufferQueueCallback,
        context: *mut c_void,
    ) -> SLresult {
        as_queue(this).callback.set((callback, context));
        SL_RESULT_SUCCESS
    }

    static SIMPLE_BUFFER_QUEUE_VTABLE: SLAndroidSimpleBufferQueueItf_ =
        SLAndroidSimpleBufferQueueItf_ {
            Enqueue: Some(enqueue),
            Clear: Some(clear),
            GetState: Some(get_state),
            RegisterCallback: Some(register_callback),
        };

    unsafe extern "C" fn count_consumed(
        _caller: SLAndroidSimpleBufferQueueItf,
        context: *mut c_void,
    ) {
        let consumed = &*(context as *const Cell<u32>);
        consumed.set(consumed.get() + 1);
    }

    #[test]
    fn simple_buffer_queue() {
        let test_queue = Box::new(TestSimpleBufferQueue {
            vtable: &SIMPLE_BUFFER_QUEUE_VTABLE,
            queued: RefCell::new(Vec::new()),
            callback: Cell::new((None, ptr::null_mut())),
        });
        let queue: SimpleBufferQueue = unsafe {
            Itf::from_raw(&test_queue.vtable as *const *const SLAndroidSimpleBufferQueueItf_)
        }
        .unwrap();

        let buffer = [0u8; 256];
        unsafe { queue.enqueue(&buffer) }.unwrap();
        assert_eq!(
            *test_queue.queued.borrow(),
            vec![(buffer.as_ptr() as *const c_void, 256)]
        );
        assert_eq!(queue.state(), Ok(SLAndroidSimpleBufferQueueState { count: 1, index: 0 }));

        queue.clear().unwrap();
        assert_eq!(queue.state(), Ok(SLAndroidSimpleBufferQueueState { count: 0, index: 0 }));

        let consumed = Cell::new(0u32);
        unsafe { queue.register_callback(Some(count_consumed), context(&consumed)) }.unwrap();
        let (callback, registered) = test_queue.callback.get();
        assert_eq!(registered, context(&consumed));
        unsafe { callback.unwrap()(queue.as_raw(), registered) };
        assert_eq!(consumed.get(), 1);
    }

    #[repr(C)]
    struct TestConfiguration {
        vtable: *const SLAndroidConfigurationItf_,
        values: RefCell<Vec<(Vec<u8>, SLuint32)>>,
        last_size: Cell<SLuint32>,
    }

    unsafe fn as_configuration<'a>(this: SLAndroidConfigurationItf) -> &'a TestConfiguration {
        &*(this as *const TestConfiguration)
    }

    unsafe extern "C" fn set_configuration(
        this: SLAndroidConfigurationItf,
        key: *const SLchar,
        value: *const c_void,
        size: SLuint32,
    ) -> SLresult {
        let configuration = as_configuration(this);
        configuration.last_size.set(size);
        if size as usize != std::mem::size_of::<SLuint32>() {
            return SL_RESULT_PARAMETER_INVALID;
        }

        let key = CStr::from_ptr(key as *const c_char).to_bytes_with_nul().to_vec();
        let value = *(value as *const SLuint32);
        let mut values = configuration.values.borrow_mut();
        match values.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => values.push((key, value)),
        }
        SL_RESULT_SUCCESS
    }

    unsafe extern "C" fn get_configuration(
        this: SLAndroidConfigurationItf,
        key: *const SLchar,
        size: *mut SLuint32,
        value: *mut c_void,
    ) -> SLresult {
        let configuration = as_configuration(this);
        let key = CStr::from_ptr(key as *const c_char).to_bytes_with_nul();
        let values = configuration.values.borrow();
        let Some(&(_, found)) = values.iter().find(|(k, _)| k.as_slice() == key) else {
            return SL_RESULT_PARAMETER_INVALID;
        };

        if (*size as usize) < std::mem::size_of::<SLuint32>() {
            return SL_RESULT_BUFFER_INSUFFICIENT;
        }
        *(value as *mut SLuint32) = found;
        *size = std::mem::size_of::<SLuint32>() as SLuint32;
        SL_RESULT_SUCCESS
    }

    static CONFIGURATION_VTABLE: SLAndroidConfigurationItf_ = SLAndroidConfigurationItf_ {
        SetConfiguration: Some(set_configuration),
        GetConfiguration: Some(get_configuration),
        AcquireJavaProxy: None,
        ReleaseJavaProxy: None,
    };

    #[test]
    fn android_configuration() {
        let test_configuration = Box::new(TestConfiguration {
            vtable: &CONFIGURATION_VTABLE,
            values: RefCell::new(Vec::new()),
            last_size: Cell::new(0),
        });
        let configuration: AndroidConfiguration = unsafe {
            Itf::from_raw(&test_configuration.vtable as *const *const SLAndroidConfigurationItf_)
        }
        .unwrap();

        configuration
            .set_u32(SL_ANDROID_KEY_PERFORMANCE_MODE, SL_ANDROID_PERFORMANCE_LATENCY)
            .unwrap();
        assert_eq!(
            *test_configuration.values.borrow(),
            vec![(b"androidPerformanceMode\0".to_vec(), SL_ANDROID_PERFORMANCE_LATENCY)]
        );
        assert_eq!(test_configuration.last_size.get(), 4);

        assert_eq!(
            configuration.u32(SL_ANDROID_KEY_PERFORMANCE_MODE),
            Ok(SL_ANDROID_PERFORMANCE_LATENCY)
        );
        assert_eq!(
            configuration.u32(b"androidPerformanceMode"),
            Ok(SL_ANDROID_PERFORMANCE_LATENCY)
        );
        assert_eq!(
            configuration.u32(SL_ANDROID_KEY_RECORDING_PRESET),
            Err(Error::ParameterInvalid)
        );
    }

    #[test]
    fn android_configuration_key_with_nul() {
        let test_configuration = Box::new(TestConfiguration {
            vtable: &CONFIGURATION_VTABLE,
            values: RefCell::new(Vec::new()),
            last_size: Cell::new(0),
        });
        let configuration: AndroidConfiguration = unsafe {
            Itf::from_raw(&test_configuration.vtable as *const *const SLAndroidConfigurationItf_)
        }
        .unwrap();

        assert!(matches!(
            configuration.set_u32(b"android\0PerformanceMode", 1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            configuration.u32(b"android\0PerformanceMode\0"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(test_configuration.values.borrow().is_empty());
        assert_eq!(test_configuration.last_size.get(), 0);
    }
}
