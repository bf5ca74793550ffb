use crate::controllers::interactive::config::ControllerConfig;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::MazeControllerPresenterPort;
use crate::core::maze::Maze;
use crate::core::util::grid_layout::{GridLayout, Viewport, calculate_grid_layout};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Flags set by command methods and consumed by the worker.
///
/// Any of `pause`, `restart` or `finish` cuts a step delay short. A paused
/// worker resumes once `pause` is cleared, and republishes its frame when
/// `repaint` is set.
struct Requests {
    pause: bool,
    restart: bool,
    solve: bool,
    finish: bool,
    repaint: bool,
    pending: ControllerConfig,
}

impl Requests {
    fn interrupts_delay(&self) -> bool {
        self.pause || self.restart || self.finish
    }

    fn keeps_paused(&self) -> bool {
        self.pause && !self.finish && !self.repaint
    }
}

struct SharedState {
    requests: Mutex<Requests>,
    wake: Condvar,
    maze_finished: AtomicBool,
    render_enabled: AtomicBool,
    steps_taken: AtomicU64,
    generation: AtomicU64,
    presenter_port: Arc<dyn MazeControllerPresenterPort>,
}

impl SharedState {
    fn lock_requests(&self) -> MutexGuard<'_, Requests> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wake_worker(&self, requests: MutexGuard<'_, Requests>) {
        drop(requests);
        self.wake.notify_one();
    }
}

/// State only the worker thread touches.
struct Worker {
    maze: Maze,
    config: ControllerConfig,
    layout: GridLayout,
}

/// Animates a [`Maze`] on a dedicated worker thread.
///
/// The worker starts paused and waits for [`restart`](Self::restart). Command
/// methods may be called from any thread; each one only sets flags and wakes
/// the worker, which picks them up at the start of its next iteration.
pub struct MazeController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl MazeController {
    pub fn new(
        presenter_port: Arc<dyn MazeControllerPresenterPort>,
        config: ControllerConfig,
    ) -> Self {
        Self::with_maze(presenter_port, config, Maze::new())
    }

    /// Like [`new`](Self::new), animating the given maze.
    pub fn with_maze(
        presenter_port: Arc<dyn MazeControllerPresenterPort>,
        config: ControllerConfig,
        maze: Maze,
    ) -> Self {
        let shared = Arc::new(SharedState {
            requests: Mutex::new(Requests {
                pause: true,
                restart: true,
                solve: true,
                finish: false,
                repaint: false,
                pending: config,
            }),
            wake: Condvar::new(),
            maze_finished: AtomicBool::new(maze.maze_finished()),
            render_enabled: AtomicBool::new(false),
            steps_taken: AtomicU64::new(0),
            generation: AtomicU64::new(0),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = Worker {
            maze,
            config,
            layout: GridLayout::default(),
        };

        let worker = thread::spawn(move || {
            worker.run(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Stages a tile side for the next restart.
    pub fn set_tile_side(&self, tile_side: u32) {
        self.shared.lock_requests().pending.tile_side = tile_side;
    }

    /// Stages a step delay for the next restart.
    pub fn set_step_delay(&self, step_delay: Duration) {
        self.shared.lock_requests().pending.step_delay = step_delay;
    }

    /// Stages a viewport size in pixels for the next restart.
    pub fn set_viewport(&self, width: u32, height: u32) {
        self.shared.lock_requests().pending.viewport = Viewport { width, height };
    }

    pub fn restart(&self) {
        let mut requests = self.shared.lock_requests();
        requests.restart = true;
        requests.pause = false;
        self.shared.wake_worker(requests);
    }

    /// Requests the solution animation. Rejected while already solving or
    /// before the maze has finished building.
    pub fn solve(&self) -> bool {
        let mut requests = self.shared.lock_requests();

        if requests.solve || !self.shared.maze_finished.load(Ordering::Acquire) {
            return false;
        }

        requests.solve = true;
        requests.pause = false;
        self.shared.wake_worker(requests);
        true
    }

    /// Stops rendering and pauses the worker. Rejected if nothing is rendered.
    pub fn clear(&self) -> bool {
        let mut requests = self.shared.lock_requests();

        if self
            .shared
            .render_enabled
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }

        requests.pause = true;
        requests.repaint = true;
        self.shared.wake_worker(requests);
        true
    }

    /// Asks the worker to stop. Does not wait for it; see [`shutdown`](Self::shutdown).
    pub fn finish(&self) {
        let mut requests = self.shared.lock_requests();
        requests.finish = true;
        self.shared.wake_worker(requests);
    }

    /// Stops the worker and waits for it to exit.
    pub fn shutdown(&mut self) {
        self.finish();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn is_worker_finished(&self) -> bool {
        self.worker
            .as_ref()
            .is_none_or(|handle| handle.is_finished())
    }

    /// Number of `Maze::step` calls the worker has made.
    #[must_use]
    pub fn steps_taken(&self) -> u64 {
        self.shared.steps_taken.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_published_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn render_enabled(&self) -> bool {
        self.shared.render_enabled.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn maze_finished(&self) -> bool {
        self.shared.maze_finished.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn solve_requested(&self) -> bool {
        self.shared.lock_requests().solve
    }
}

impl Drop for MazeController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl Worker {
    fn run(mut self, shared: &SharedState) {
        loop {
            let mut requests = shared.lock_requests();

            if requests.finish {
                break;
            }

            if requests.pause {
                requests.repaint = false;
                drop(requests);
                self.publish_frame(shared);
                Self::wait_while_paused(shared);
                continue;
            }

            if requests.restart {
                requests.restart = false;
                requests.solve = false;
                let config = requests.pending;
                drop(requests);

                if !self.restart(shared, config) {
                    shared.lock_requests().pause = true;
                    continue;
                }
            } else {
                drop(requests);
            }

            self.maze.step();
            shared.steps_taken.fetch_add(1, Ordering::AcqRel);
            shared
                .maze_finished
                .store(self.maze.maze_finished(), Ordering::Release);

            let mut requests = shared.lock_requests();
            let animating = !self.maze.maze_finished()
                || (requests.solve && !self.maze.solution_finished());

            if !animating {
                requests.pause = true;
                continue;
            }
            drop(requests);

            if !self.config.step_delay.is_zero() {
                self.publish_frame(shared);
                self.sleep(shared);
            }
        }

        info!(steps = shared.steps_taken.load(Ordering::Acquire), "maze worker stopped");
    }

    /// Applies `config` and rebuilds the maze. On failure the previous maze is
    /// kept and rendering is disabled.
    fn restart(&mut self, shared: &SharedState, config: ControllerConfig) -> bool {
        let layout = calculate_grid_layout(config.viewport, config.tile_side);

        match self.maze.restart(layout.columns, layout.rows) {
            Ok(()) => {
                debug!(
                    columns = layout.columns,
                    rows = layout.rows,
                    tile_side = layout.tile_side,
                    step_delay_ms = config.step_delay.as_millis() as u64,
                    "maze restarted"
                );

                self.config = config;
                self.layout = layout;
                shared.maze_finished.store(false, Ordering::Release);
                shared.render_enabled.store(true, Ordering::Release);
                true
            }
            Err(err) => {
                warn!(
                    viewport_width = config.viewport.width,
                    viewport_height = config.viewport.height,
                    tile_side = config.tile_side,
                    "maze restart rejected: {err}"
                );

                shared.render_enabled.store(false, Ordering::Release);
                let generation = shared.generation.fetch_add(1, Ordering::AcqRel) + 1;
                shared.presenter_port.present(RenderEvent::Error(RenderError {
                    generation,
                    message: err.to_string(),
                }));
                false
            }
        }
    }

    fn publish_frame(&self, shared: &SharedState) {
        let generation = shared.generation.fetch_add(1, Ordering::AcqRel) + 1;
        trace!(generation, "publishing maze frame");

        shared.presenter_port.present(RenderEvent::Frame(FrameData {
            generation,
            render_enabled: shared.render_enabled.load(Ordering::Acquire),
            layout: self.layout,
            snapshot: self.maze.snapshot(),
        }));
    }

    fn wait_while_paused(shared: &SharedState) {
        let requests = shared.lock_requests();
        let _requests = shared
            .wake
            .wait_while(requests, |r| r.keeps_paused())
            .unwrap_or_else(PoisonError::into_inner);
    }

    /// Waits out the step delay unless a command interrupts it.
    fn sleep(&self, shared: &SharedState) {
        let requests = shared.lock_requests();
        let _requests = shared
            .wake
            .wait_timeout_while(requests, self.config.step_delay, |r| {
                !r.interrupts_delay()
            })
            .unwrap_or_else(PoisonError::into_inner);
    }
}
