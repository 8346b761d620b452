use crate::object::SLObjectItf;
use crate::types::*;

pub type SL3DGroupingItf = *const *const SL3DGroupingItf_;

#[repr(C)]
pub struct SL3DGroupingItf_ {
    pub Set3DGroup:
        Option<unsafe extern "C" fn(self_: SL3DGroupingItf, group: SLObjectItf) -> SLresult>,
    pub Get3DGroup:
        Option<unsafe extern "C" fn(self_: SL3DGroupingItf, pGroup: *mut SLObjectItf) -> SLresult>,
}

pub const SL_3DHINT_OFF: SLuint16 = 0x0000;
pub const SL_3DHINT_QUALITY_LOWEST: SLuint16 = 0x0001;
pub const SL_3DHINT_QUALITY_LOW: SLuint16 = 0x4000;
pub const SL_3DHINT_QUALITY_MEDIUM: SLuint16 = 0x8000;
pub const SL_3DHINT_QUALITY_HIGH: SLuint16 = 0xC000;
pub const SL_3DHINT_QUALITY_HIGHEST: SLuint16 = 0xFFFF;

pub type SL3DHintItf = *const *const SL3DHintItf_;

#[repr(C)]
pub struct SL3DHintItf_ {
    pub SetRenderHint:
        Option<unsafe extern "C" fn(self_: SL3DHintItf, qualityHint: SLuint16) -> SLresult>,
    pub GetRenderHint:
        Option<unsafe extern "C" fn(self_: SL3DHintItf, pQualityHint: *mut SLuint16) -> SLresult>,
}

pub type SL3DCommitItf = *const *const SL3DCommitItf_;

#[repr(C)]
pub struct SL3DCommitItf_ {
    pub Commit: Option<unsafe extern "C" fn(self_: SL3DCommitItf) -> SLresult>,
    pub SetDeferred:
        Option<unsafe extern "C" fn(self_: SL3DCommitItf, deferred: SLboolean) -> SLresult>,
}

/// Cartesian vector in millimeters.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SLVec3D {
    pub x: SLint32,
    pub y: SLint32,
    pub z: SLint32,
}

pub type SL3DLocationItf = *const *const SL3DLocationItf_;

#[repr(C)]
pub struct SL3DLocationItf_ {
    pub SetLocationCartesian:
        Option<unsafe extern "C" fn(self_: SL3DLocationItf, pLocation: *const SLVec3D) -> SLresult>,
    pub SetLocationSpherical: Option<
        unsafe extern "C" fn(
            self_: SL3DLocationItf,
            azimuth: SLmillidegree,
            elevation: SLmillidegree,
            distance: SLmillimeter,
        ) -> SLresult,
    >,
    pub Move:
        Option<unsafe extern "C" fn(self_: SL3DLocationItf, pMovement: *const SLVec3D) -> SLresult>,
    pub GetLocationCartesian:
        Option<unsafe extern "C" fn(self_: SL3DLocationItf, pLocation: *mut SLVec3D) -> SLresult>,
    pub SetOrientationVectors: Option<
        unsafe extern "C" fn(
            self_: SL3DLocationItf,
            pFront: *const SLVec3D,
            pAbove: *const SLVec3D,
        ) -> SLresult,
    >,
    pub SetOrientationAngles: Option<
        unsafe extern "C" fn(
            self_: SL3DLocationItf,
            heading: SLmillidegree,
            pitch: SLmillidegree,
            roll: SLmillidegree,
        ) -> SLresult,
    >,
    pub Rotate: Option<
        unsafe extern "C" fn(
            self_: SL3DLocationItf,
            theta: SLmillidegree,
            pAxis: *const SLVec3D,
        ) -> SLresult,
    >,
    pub GetOrientationVectors: Option<
        unsafe extern "C" fn(
            self_: SL3DLocationItf,
            pFront: *mut SLVec3D,
            pUp: *mut SLVec3D,
        ) -> SLresult,
    >,
}

pub type SL3DDopplerItf = *const *const SL3DDopplerItf_;

#[repr(C)]
pub struct SL3DDopplerItf_ {
    pub SetVelocityCartesian:
        Option<unsafe extern "C" fn(self_: SL3DDopplerItf, pVelocity: *const SLVec3D) -> SLresult>,
    pub SetVelocitySpherical: Option<
        unsafe extern "C" fn(
            self_: SL3DDopplerItf,
            azimuth: SLmillidegree,
            elevation: SLmillidegree,
            speed: SLmillimeter,
        ) -> SLresult,
    >,
    pub GetVelocityCartesian:
        Option<unsafe extern "C" fn(self_: SL3DDopplerItf, pVelocity: *mut SLVec3D) -> SLresult>,
    pub SetDopplerFactor:
        Option<unsafe extern "C" fn(self_: SL3DDopplerItf, dopplerFactor: SLpermille) -> SLresult>,
    pub GetDopplerFactor: Option<
        unsafe extern "C" fn(self_: SL3DDopplerItf, pDopplerFactor: *mut SLpermille) -> SLresult,
    >,
}

/// Declared as 32-bit in `OpenSLES.h` but passed through `SLuint8` parameters.
pub const SL_ROLLOFFMODEL_EXPONENTIAL: SLuint8 = 0x00;
pub const SL_ROLLOFFMODEL_LINEAR: SLuint8 = 0x01;

pub type SL3DSourceItf = *const *const SL3DSourceItf_;

#[repr(C)]
pub struct SL3DSourceItf_ {
    pub SetHeadRelative:
        Option<unsafe extern "C" fn(self_: SL3DSourceItf, headRelative: SLboolean) -> SLresult>,
    pub GetHeadRelative: Option<
        unsafe extern "C" fn(self_: SL3DSourceItf, pHeadRelative: *mut SLboolean) -> SLresult,
    >,
    pub SetRolloffDistances: Option<
        unsafe extern "C" fn(
            self_: SL3DSourceItf,
            minDistance: SLmillimeter,
            maxDistance: SLmillimeter,
        ) -> SLresult,
    >,
    pub GetRolloffDistances: Option<
        unsafe extern "C" fn(
            self_: SL3DSourceItf,
            pMinDistance: *mut SLmillimeter,
            pMaxDistance: *mut SLmillimeter,
        ) -> SLresult,
    >,
    pub SetRolloffMaxDistanceMute:
        Option<unsafe extern "C" fn(self_: SL3DSourceItf, mute: SLboolean) -> SLresult>,
    pub GetRolloffMaxDistanceMute:
        Option<unsafe extern "C" fn(self_: SL3DSourceItf, pMute: *mut SLboolean) -> SLresult>,
    pub SetRolloffFactor:
        Option<unsafe extern "C" fn(self_: SL3DSourceItf, rolloffFactor: SLpermille) -> SLresult>,
    pub GetRolloffFactor: Option<
        unsafe extern "C" fn(self_: SL3DSourceItf, pRolloffFactor: *mut SLpermille) -> SLresult,
    >,
    pub SetRoomRolloffFactor: Option<
        unsafe extern "C" fn(self_: SL3DSourceItf, roomRolloffFactor: SLpermille) -> SLresult,
    >,
    pub GetRoomRolloffFactor: Option<
        unsafe extern "C" fn(self_: SL3DSourceItf, pRoomRolloffFactor: *mut SLpermille) -> SLresult,
    >,
    pub SetRolloffModel:
        Option<unsafe extern "C" fn(self_: SL3DSourceItf, model: SLuint8) -> SLresult>,
    pub GetRolloffModel:
        Option<unsafe extern "C" fn(self_: SL3DSourceItf, pModel: *mut SLuint8) -> SLresult>,
    pub SetCone: Option<
        unsafe extern "C" fn(
            self_: SL3DSourceItf,
            innerAngle: SLmillidegree,
            outerAngle: SLmillidegree,
            outerLevel: SLmillibel,
        ) -> SLresult,
    >,
    pub GetCone: Option<
        unsafe extern "C" fn(
            self_: SL3DSourceItf,
            pInnerAngle: *mut SLmillidegree,
            pOuterAngle: *mut SLmillidegree,
            pOuterLevel: *mut SLmillibel,
        ) -> SLresult,
    >,
}

pub type SL3DMacroscopicItf = *const *const SL3DMacroscopicItf_;

#[repr(C)]
pub struct SL3DMacroscopicItf_ {
    pub SetSize: Option<
        unsafe extern "C" fn(
            self_: SL3DMacroscopicItf,
            width: SLmillimeter,
            height: SLmillimeter,
            depth: SLmillimeter,
        ) -> SLresult,
    >,
    pub GetSize: Option<
        unsafe extern "C" fn(
            self_: SL3DMacroscopicItf,
            pWidth: *mut SLmillimeter,
            pHeight: *mut SLmillimeter,
            pDepth: *mut SLmillimeter,
        ) -> SLresult,
    >,
    pub SetOrientationAngles: Option<
        unsafe extern "C" fn(
            self_: SL3DMacroscopicItf,
            heading: SLmillidegree,
            pitch: SLmillidegree,
            roll: SLmillidegree,
        ) -> SLresult,
    >,
    pub SetOrientationVectors: Option<
        unsafe extern "C" fn(
            self_: SL3DMacroscopicItf,
            pFront: *const SLVec3D,
            pAbove: *const SLVec3D,
        ) -> SLresult,
    >,
    pub Rotate: Option<
        unsafe extern "C" fn(
            self_: SL3DMacroscopicItf,
            theta: SLmillidegree,
            pAxis: *const SLVec3D,
        ) -> SLresult,
    >,
    pub GetOrientationVectors: Option<
        unsafe extern "C" fn(
            self_: SL3DMacroscopicItf,
            pFront: *mut SLVec3D,
            pUp: *mut SLVec3D,
        ) -> SLresult,
    >,
}
