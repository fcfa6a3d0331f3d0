use std::fs::File;
use std::io;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::sleep;
use std::time::Duration;

use log::{debug, info, warn};
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

use crate::config::PlayerConfig;
use crate::error::KioskError;
use crate::traits::MediaPlayer;

/// External decode pipeline: a video process writing the framebuffer, its
/// stdout optionally piped into an audio process.
pub struct Player {
    config: PlayerConfig,
    video: Option<Child>,
    audio: Option<Child>,
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            config,
            video: None,
            audio: None,
        }
    }

    fn run_setup(&self) {
        for cmd in &self.config.setup {
            match Command::new("sh").arg("-c").arg(cmd).status() {
                Ok(status) if status.success() => {}
                Ok(status) => warn!("setup `{cmd}` exited with {status}"),
                Err(e) => warn!("setup `{cmd}` failed: {e}"),
            }
        }
    }

    fn preload(&self, path: &Path) {
        let small = path
            .metadata()
            .map(|m| m.len() <= self.config.preload_limit)
            .unwrap_or(false);
        if !small {
            return;
        }
        let read = File::open(path).and_then(|mut f| io::copy(&mut f, &mut io::sink()));
        match read {
            Ok(bytes) => debug!("preloaded {bytes} bytes of {}", path.display()),
            Err(e) => warn!("preload of {} failed: {e}", path.display()),
        }
    }
}

/// Quotes `text` for `/bin/sh` with single quotes.
pub fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// Fills `{file}` in a command template with the quoted path.
pub fn render_command(template: &str, path: &Path) -> String {
    template.replace("{file}", &shell_quote(&path.to_string_lossy()))
}

fn shell(cmd: &str) -> Command {
    // exec so signals reach the program rather than the shell
    let mut command = Command::new("sh");
    command.arg("-c").arg(format!("exec {cmd}"));
    command
}

fn signal(child: &Child, sig: Signal) {
    if let Err(e) = kill(Pid::from_raw(child.id() as i32), sig) {
        debug!("{sig} to {} failed: {e}", child.id());
    }
}

fn reap(mut child: Child) {
    match child.try_wait() {
        Ok(Some(_)) => {}
        _ => {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

fn exited(child: &mut Option<Child>) -> bool {
    match child.as_mut().map(Child::try_wait) {
        None | Some(Ok(None)) => false,
        Some(Ok(Some(status))) => {
            debug!("player process exited with {status}");
            true
        }
        Some(Err(e)) => {
            warn!("cannot poll player process: {e}");
            true
        }
    }
}

impl MediaPlayer for Player {
    fn play(&mut self, path: &Path) -> Result<(), KioskError> {
        if self.is_active() {
            self.stop();
        }
        self.run_setup();
        self.preload(path);

        let video_cmd = render_command(&self.config.video_command, path);
        let piped = !self.config.audio_command.trim().is_empty();
        let mut video = shell(&video_cmd)
            .stdin(Stdio::null())
            .stdout(if piped { Stdio::piped() } else { Stdio::null() })
            .spawn()
            .map_err(|e| KioskError::Player(format!("cannot start `{video_cmd}`: {e}")))?;

        if piped {
            let stdout = video
                .stdout
                .take()
                .ok_or_else(|| KioskError::Player("decoder has no stdout".into()))?;
            match shell(&self.config.audio_command).stdin(stdout).spawn() {
                Ok(audio) => self.audio = Some(audio),
                Err(e) => {
                    reap(video);
                    return Err(KioskError::Player(format!(
                        "cannot start `{}`: {e}",
                        self.config.audio_command
                    )));
                }
            }
        }
        info!("playing {}", path.display());
        self.video = Some(video);
        Ok(())
    }

    fn is_running(&mut self) -> bool {
        if self.video.is_none() {
            return false;
        }
        if exited(&mut self.video) || exited(&mut self.audio) {
            self.stop();
            return false;
        }
        true
    }

    fn is_active(&self) -> bool {
        self.video.is_some()
    }

    fn stop(&mut self) {
        let video = self.video.take();
        let audio = self.audio.take();
        if video.is_none() && audio.is_none() {
            return;
        }
        if let Some(v) = &video {
            signal(v, Signal::SIGINT);
        }
        if let Some(a) = &audio {
            signal(a, Signal::SIGINT);
            sleep(Duration::from_millis(self.config.stop_grace_ms));
            signal(a, Signal::SIGTERM);
        }
        video.into_iter().chain(audio).for_each(reap);
        info!("playback stopped");
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.stop();
    }
}
