//! Classical discrete Fourier transform of a signal, ignoring graph topology.
//!
//! Treats the signal as samples on a directed ring. For cycle graphs the DFT basis
//! diagonalizes the Laplacian, so this is an exact, `O(N log N)` alternative to the
//! eigenbasis transform there. Not used by the filters.

use crate::signal::Signal;
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

/// Forward DFT of a real signal.
pub fn fourier_transform(signal: &Signal) -> Vec<Complex64> {
    let mut buffer: Vec<Complex64> = signal
        .iter()
        .map(|&value| Complex64::new(value, 0.0))
        .collect();
    if buffer.is_empty() {
        return buffer;
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

/// Inverse DFT, keeping the real part. Scaled by `1/N` so that
/// `inverse_fourier_transform(&fourier_transform(s)) == s`.
pub fn inverse_fourier_transform(spectrum: &[Complex64]) -> Signal {
    if spectrum.is_empty() {
        return Signal::new(0);
    }

    let mut buffer = spectrum.to_vec();
    let mut planner = FftPlanner::new();
    let ifft = planner.plan_fft_inverse(buffer.len());
    ifft.process(&mut buffer);

    let scale = 1.0 / buffer.len() as f64;
    buffer.iter().map(|value| value.re * scale).collect()
}

/// Magnitude of the real part of each DFT coefficient.
pub fn magnitude_spectrum(signal: &Signal) -> Signal {
    fourier_transform(signal)
        .iter()
        .map(|value| value.re.abs())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_constant_signal_dc_only() {
        let spectrum = fourier_transform(&Signal::from(vec![1.0; 4]));
        assert_abs_diff_eq!(spectrum[0].re, 4.0, epsilon = 1e-12);
        for value in &spectrum[1..] {
            assert_abs_diff_eq!(value.norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_round_trip() {
        let signal = Signal::from(vec![1.0, -2.0, 3.5, 0.25, 7.0]);
        let restored = inverse_fourier_transform(&fourier_transform(&signal));
        for (a, b) in signal.iter().zip(restored.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_magnitude_spectrum() {
        let magnitudes = magnitude_spectrum(&Signal::from(vec![1.0, -1.0, 1.0, -1.0]));
        assert_abs_diff_eq!(magnitudes[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(magnitudes[2], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty() {
        assert!(fourier_transform(&Signal::new(0)).is_empty());
        assert!(inverse_fourier_transform(&[]).is_empty());
    }
}
