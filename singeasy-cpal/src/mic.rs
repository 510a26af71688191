//! Microphone capture via `cpal`.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use singeasy_core::processing::pcm;
use singeasy_core::{CaptureDevice, CaptureFormat, CaptureSource, ChunkSink, SessionError};

/// `CaptureSource` over the host's default input device.
///
/// Chunks are mono 16-bit little-endian PCM, one chunk per cpal buffer,
/// delivered on the audio thread. The cpal stream is held between
/// `start()` and `stop()`; dropping it stops the hardware stream, so the
/// microphone can never outlive the source.
pub struct CpalMicSource {
    device: cpal::Device,
    config: cpal::SupportedStreamConfig,
    stream: Option<cpal::Stream>,
}

impl CpalMicSource {
    /// Open the default input device.
    ///
    /// Fails with `DeviceUnavailable` when the host has no usable
    /// microphone.
    pub fn default_device() -> Result<Self, SessionError> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or(SessionError::DeviceUnavailable)?;
        let config = device.default_input_config().map_err(|e| {
            log::warn!("no usable input config: {e}");
            SessionError::DeviceUnavailable
        })?;
        Ok(Self {
            device,
            config,
            stream: None,
        })
    }
}

impl CaptureSource for CpalMicSource {
    fn start(&mut self, sink: ChunkSink) -> Result<(), SessionError> {
        if self.stream.is_some() {
            return Err(SessionError::InvalidState("capture stream already running"));
        }

        let channels = self.config.channels() as usize;
        let stream_config: cpal::StreamConfig = self.config.clone().into();
        let err_fn = |err| log::error!("input stream error: {err}");

        let stream = match self.config.sample_format() {
            cpal::SampleFormat::F32 => self
                .device
                .build_input_stream(
                    &stream_config,
                    move |samples: &[f32], _: &cpal::InputCallbackInfo| {
                        let mono = pcm::downmix_to_mono(samples, channels);
                        (*sink)(&pcm::to_i16_le_bytes(&mono));
                    },
                    err_fn,
                    None,
                )
                .map_err(map_build_error)?,
            cpal::SampleFormat::I16 => self
                .device
                .build_input_stream(
                    &stream_config,
                    move |samples: &[i16], _: &cpal::InputCallbackInfo| {
                        let as_f32: Vec<f32> =
                            samples.iter().map(|&s| s as f32 / 32768.0).collect();
                        let mono = pcm::downmix_to_mono(&as_f32, channels);
                        (*sink)(&pcm::to_i16_le_bytes(&mono));
                    },
                    err_fn,
                    None,
                )
                .map_err(map_build_error)?,
            other => {
                log::warn!("unsupported input sample format: {other:?}");
                return Err(SessionError::DeviceUnavailable);
            }
        };

        stream.play().map_err(|e| {
            log::warn!("could not start input stream: {e}");
            SessionError::DeviceUnavailable
        })?;

        self.stream = Some(stream);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), SessionError> {
        // Dropping the stream stops the hardware capture.
        self.stream = None;
        Ok(())
    }

    fn format(&self) -> CaptureFormat {
        CaptureFormat {
            sample_rate: self.config.sample_rate().0,
            channels: 1, // downmixed before delivery
            bit_depth: 16,
        }
    }

    fn device_info(&self) -> CaptureDevice {
        let name = self
            .device
            .name()
            .unwrap_or_else(|_| "unknown input device".to_string());
        CaptureDevice {
            id: name.clone(),
            name,
            is_default: true,
        }
    }
}

fn map_build_error(err: cpal::BuildStreamError) -> SessionError {
    match err {
        cpal::BuildStreamError::DeviceNotAvailable => SessionError::DeviceUnavailable,
        // OS privacy toggles surface as backend-specific errors.
        cpal::BuildStreamError::BackendSpecific { err } => {
            log::warn!("backend refused capture: {}", err.description);
            SessionError::PermissionDenied
        }
        other => {
            log::warn!("could not build input stream: {other}");
            SessionError::DeviceUnavailable
        }
    }
}
