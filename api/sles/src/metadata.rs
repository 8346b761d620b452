use std::ffi::c_void;

use crate::types::*;

pub const SL_CHARACTERENCODING_UNKNOWN: SLuint32 = 0x00000000;
pub const SL_CHARACTERENCODING_BINARY: SLuint32 = 0x00000001;
pub const SL_CHARACTERENCODING_ASCII: SLuint32 = 0x00000002;
pub const SL_CHARACTERENCODING_BIG5: SLuint32 = 0x00000003;
pub const SL_CHARACTERENCODING_CODEPAGE1252: SLuint32 = 0x00000004;
pub const SL_CHARACTERENCODING_GB2312: SLuint32 = 0x00000005;
pub const SL_CHARACTERENCODING_HZGB2312: SLuint32 = 0x00000006;
pub const SL_CHARACTERENCODING_GB12345: SLuint32 = 0x00000007;
pub const SL_CHARACTERENCODING_GB18030: SLuint32 = 0x00000008;
pub const SL_CHARACTERENCODING_GBK: SLuint32 = 0x00000009;
pub const SL_CHARACTERENCODING_IMAPUTF7: SLuint32 = 0x0000000A;
pub const SL_CHARACTERENCODING_ISO2022JP: SLuint32 = 0x0000000B;
pub const SL_CHARACTERENCODING_ISO2022JP1: SLuint32 = 0x0000000B;
pub const SL_CHARACTERENCODING_ISO88591: SLuint32 = 0x0000000C;
pub const SL_CHARACTERENCODING_ISO885910: SLuint32 = 0x0000000D;
pub const SL_CHARACTERENCODING_ISO885913: SLuint32 = 0x0000000E;
pub const SL_CHARACTERENCODING_ISO885914: SLuint32 = 0x0000000F;
pub const SL_CHARACTERENCODING_ISO885915: SLuint32 = 0x00000010;
pub const SL_CHARACTERENCODING_ISO88592: SLuint32 = 0x00000011;
pub const SL_CHARACTERENCODING_ISO88593: SLuint32 = 0x00000012;
pub const SL_CHARACTERENCODING_ISO88594: SLuint32 = 0x00000013;
pub const SL_CHARACTERENCODING_ISO88595: SLuint32 = 0x00000014;
pub const SL_CHARACTERENCODING_ISO88596: SLuint32 = 0x00000015;
pub const SL_CHARACTERENCODING_ISO88597: SLuint32 = 0x00000016;
pub const SL_CHARACTERENCODING_ISO88598: SLuint32 = 0x00000017;
pub const SL_CHARACTERENCODING_ISO88599: SLuint32 = 0x00000018;
pub const SL_CHARACTERENCODING_ISOEUCJP: SLuint32 = 0x00000019;
pub const SL_CHARACTERENCODING_SHIFTJIS: SLuint32 = 0x0000001A;
pub const SL_CHARACTERENCODING_SMS7BIT: SLuint32 = 0x0000001B;
pub const SL_CHARACTERENCODING_UTF7: SLuint32 = 0x0000001C;
pub const SL_CHARACTERENCODING_UTF8: SLuint32 = 0x0000001D;
pub const SL_CHARACTERENCODING_JAVACONFORMANTUTF8: SLuint32 = 0x0000001E;
pub const SL_CHARACTERENCODING_UTF16BE: SLuint32 = 0x0000001F;
pub const SL_CHARACTERENCODING_UTF16LE: SLuint32 = 0x00000020;

pub const SL_METADATA_FILTER_KEY: SLuint8 = 0x01;
pub const SL_METADATA_FILTER_LANG: SLuint8 = 0x02;
pub const SL_METADATA_FILTER_ENCODING: SLuint8 = 0x04;

/// Variable-length record: `size` counts the whole struct including the
/// bytes of `data`, which continue past the declared single element.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SLMetadataInfo {
    pub size: SLuint32,
    pub encoding: SLuint32,
    pub langCountry: [SLchar; 16],
    pub data: [SLuint8; 1],
}

pub type SLMetadataExtractionItf = *const *const SLMetadataExtractionItf_;

#[repr(C)]
pub struct SLMetadataExtractionItf_ {
    pub GetItemCount: Option<
        unsafe extern "C" fn(self_: SLMetadataExtractionItf, pItemCount: *mut SLuint32) -> SLresult,
    >,
    pub GetKeySize: Option<
        unsafe extern "C" fn(
            self_: SLMetadataExtractionItf,
            index: SLuint32,
            pKeySize: *mut SLuint32,
        ) -> SLresult,
    >,
    pub GetKey: Option<
        unsafe extern "C" fn(
            self_: SLMetadataExtractionItf,
            index: SLuint32,
            keySize: SLuint32,
            pKey: *mut SLMetadataInfo,
        ) -> SLresult,
    >,
    pub GetValueSize: Option<
        unsafe extern "C" fn(
            self_: SLMetadataExtractionItf,
            index: SLuint32,
            pValueSize: *mut SLuint32,
        ) -> SLresult,
    >,
    pub GetValue: Option<
        unsafe extern "C" fn(
            self_: SLMetadataExtractionItf,
            index: SLuint32,
            valueSize: SLuint32,
            pValue: *mut SLMetadataInfo,
        ) -> SLresult,
    >,
    pub AddKeyFilter: Option<
        unsafe extern "C" fn(
            self_: SLMetadataExtractionItf,
            keySize: SLuint32,
            pKey: *const c_void,
            keyEncoding: SLuint32,
            pValueLangCountry: *const SLchar,
            valueEncoding: SLuint32,
            filterMask: SLuint8,
        ) -> SLresult,
    >,
    pub ClearKeyFilter: Option<unsafe extern "C" fn(self_: SLMetadataExtractionItf) -> SLresult>,
}

pub type SLMetadataMessageItf = *const *const SLMetadataMessageItf_;

pub type slMetadataCallback = Option<
    unsafe extern "C" fn(caller: SLMetadataMessageItf, pContext: *mut c_void, index: SLuint32),
>;

#[repr(C)]
pub struct SLMetadataMessageItf_ {
    pub RegisterMetadataCallback: Option<
        unsafe extern "C" fn(
            self_: SLMetadataMessageItf,
            callback: slMetadataCallback,
            pContext: *mut c_void,
        ) -> SLresult,
    >,
}

pub const SL_METADATATRAVERSALMODE_ALL: SLuint32 = 0x00000001;
pub const SL_METADATATRAVERSALMODE_NODE: SLuint32 = 0x00000002;

pub const SL_NODETYPE_UNSPECIFIED: SLuint32 = 0x00000001;
pub const SL_NODETYPE_AUDIO: SLuint32 = 0x00000002;
pub const SL_NODETYPE_VIDEO: SLuint32 = 0x00000003;
pub const SL_NODETYPE_IMAGE: SLuint32 = 0x00000004;

/// Passed to `SetActiveNode` to move back up one level.
pub const SL_NODE_PARENT: SLuint32 = 0xFFFFFFFF;

pub type SLMetadataTraversalItf = *const *const SLMetadataTraversalItf_;

#[repr(C)]
pub struct SLMetadataTraversalItf_ {
    pub SetMode:
        Option<unsafe extern "C" fn(self_: SLMetadataTraversalItf, mode: SLuint32) -> SLresult>,
    pub GetChildCount: Option<
        unsafe extern "C" fn(self_: SLMetadataTraversalItf, pCount: *mut SLuint32) -> SLresult,
    >,
    pub GetChildMIMETypeSize: Option<
        unsafe extern "C" fn(
            self_: SLMetadataTraversalItf,
            index: SLuint32,
            pSize: *mut SLuint32,
        ) -> SLresult,
    >,
    pub GetChildInfo: Option<
        unsafe extern "C" fn(
            self_: SLMetadataTraversalItf,
            index: SLuint32,
            pNodeID: *mut SLint32,
            pType: *mut SLuint32,
            size: SLuint32,
            pMimeType: *mut SLchar,
        ) -> SLresult,
    >,
    pub SetActiveNode:
        Option<unsafe extern "C" fn(self_: SLMetadataTraversalItf, index: SLuint32) -> SLresult>,
}
